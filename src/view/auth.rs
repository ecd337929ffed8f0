//! Login and signup view

use std::sync::Arc;

use log::debug;

use super::messages::{INVALID_CREDENTIALS, SIGNUP_COMPLETE, USER_EXISTS};
use super::validation::{LoginForm, SignupForm, SignupPolicy};
use super::{Outcome, Route, Surface};
use crate::client::DiaryApi;
use crate::session::SessionManager;

/// Which form the auth view is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Controller for the combined login/signup view
pub struct AuthController {
    api: Arc<dyn DiaryApi>,
    session: Arc<SessionManager>,
    surface: Arc<dyn Surface>,
    policy: SignupPolicy,
    tab: AuthTab,
}

impl AuthController {
    pub fn new(
        api: Arc<dyn DiaryApi>,
        session: Arc<SessionManager>,
        surface: Arc<dyn Surface>,
        policy: SignupPolicy,
    ) -> Self {
        Self {
            api,
            session,
            surface,
            policy,
            tab: AuthTab::Login,
        }
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    /// Show the current form
    pub fn activate(&self) {
        self.surface.show_tab(self.tab);
    }

    /// Switch forms. Re-selecting the visible tab does nothing.
    pub fn select_tab(&mut self, tab: AuthTab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.surface.clear_error();
        self.surface.show_tab(tab);
    }

    /// Exchange credentials for a token, store it and go to the dashboard.
    pub async fn submit_login(&self, username: &str, password: &str) -> Outcome {
        let form = LoginForm::new(username, password);
        if let Err(e) = form.validate() {
            self.surface.show_error(&e.to_string());
            return Outcome::Invalid;
        }

        let response = match self.api.login(&form.username, &form.password).await {
            Ok(response) => response,
            Err(e) => {
                debug!("Login failed: {}", e);
                self.surface.show_error(INVALID_CREDENTIALS);
                return Outcome::Failed;
            }
        };

        if let Err(e) = self
            .session
            .set_session(&response.access_token, response.user)
        {
            debug!("Could not store session: {}", e);
            self.surface.show_error(INVALID_CREDENTIALS);
            return Outcome::Failed;
        }

        self.surface.clear_error();
        self.surface.navigate(Route::Dashboard);
        Outcome::Completed
    }

    /// Validate the signup form, register, then return to the login form.
    pub async fn submit_signup(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Outcome {
        let form = SignupForm::new(username, email, password, password_confirm);
        if let Err(e) = form.validate(self.policy) {
            self.surface.show_error(&e.to_string());
            return Outcome::Invalid;
        }

        if let Err(e) = self
            .api
            .register(&form.username, &form.email, &form.password)
            .await
        {
            debug!("Registration failed: {}", e);
            self.surface.show_error(USER_EXISTS);
            return Outcome::Failed;
        }

        self.surface.alert(SIGNUP_COMPLETE);
        self.select_tab(AuthTab::Login);
        Outcome::Completed
    }
}

//! Static shell completions

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Binary name used in generated scripts
const BIN_NAME: &str = "mydiary";

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Run the completion command, printing to stdout
pub fn run(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

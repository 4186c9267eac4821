use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Write the completion script for `shell` to `out`.
pub fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

/// Generate shell completion script and write to stdout
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    write_completions(cmd, shell, &mut io::stdout());
}

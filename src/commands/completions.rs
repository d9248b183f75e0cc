//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::{Cli, CompletionsArgs};
use scheme_editor::error::{Result, unsupported_shell};

/// Generate shell completions to stdout
pub fn run(args: &CompletionsArgs) -> Result<()> {
    generate(args, &mut std::io::stdout().lock())
}

fn generate(args: &CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "scheme-editor", out);
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(unsupported_shell(name)),
    }
}

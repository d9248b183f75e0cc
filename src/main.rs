//! Scheme Editor - color scheme finder
//!
//! Searches an editor's loose packages and package archives for color scheme
//! files and prints the one the user picks.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use scheme_editor::error::Result;
use scheme_editor::{PackageRoots, Settings};

/// Log filter from `RUST_LOG`, else `debug` with `--verbose`, else `warn`
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "scheme_editor=debug"
        } else {
            "warn"
        })
    })
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Settings and package roots for commands that search
fn load_roots(cli: &Cli) -> Result<(Settings, PackageRoots)> {
    let settings = Settings::load(cli.config.as_deref())?;
    let roots = PackageRoots::resolve(cli.roots.clone().into(), &settings);
    tracing::debug!(
        user = ?roots.user,
        installed = ?roots.installed,
        default = ?roots.default,
        "package roots"
    );
    Ok((settings, roots))
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Search(args) => {
            let (settings, roots) = load_roots(cli)?;
            commands::search::run(&settings, roots, args)
        }
        Commands::List(args) => {
            let (settings, roots) = load_roots(cli)?;
            commands::list::run(&settings, roots, args)
        }
        Commands::Show(args) => {
            let (_, roots) = load_roots(cli)?;
            commands::show::run(roots, args)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use scheme_editor::config::RootOverrides;

/// Scheme Editor - color scheme finder
///
/// Find color scheme files across loose and archived editor packages.
#[derive(Parser, Debug)]
#[command(
    name = "scheme-editor",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Find color scheme files across editor packages",
    long_about = "Scheme Editor searches the editor's loose packages, installed archives and \
                  default archives for color scheme files, honoring the editor's override rules \
                  unless asked to reveal every copy.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  scheme-editor search\n    \
                  scheme-editor search '*.sublime-color-scheme'\n    \
                  scheme-editor list --all\n    \
                  scheme-editor list --regex 'Packages/Color Scheme - Default/.*'\n    \
                  scheme-editor show 'Packages/Color Scheme - Default/Monokai.sublime-color-scheme'"
)]
pub struct Cli {
    /// Settings file (defaults to <config dir>/scheme-editor/settings.jsonc)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub roots: RootArgs,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Package root locations
#[derive(Args, Debug, Clone, Default)]
pub struct RootArgs {
    /// Loose packages directory
    #[arg(long, global = true, env = "SCHEME_EDITOR_PACKAGES", value_name = "DIR")]
    pub packages: Option<PathBuf>,

    /// Installed package archives directory
    #[arg(
        long,
        global = true,
        env = "SCHEME_EDITOR_INSTALLED_PACKAGES",
        value_name = "DIR"
    )]
    pub installed_packages: Option<PathBuf>,

    /// Default package archives directory
    #[arg(
        long,
        global = true,
        env = "SCHEME_EDITOR_DEFAULT_PACKAGES",
        value_name = "DIR"
    )]
    pub default_packages: Option<PathBuf>,
}

impl From<RootArgs> for RootOverrides {
    fn from(args: RootArgs) -> Self {
        RootOverrides {
            packages: args.packages,
            installed_packages: args.installed_packages,
            default_packages: args.default_packages,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a color scheme interactively
    Search(SearchArgs),

    /// Print matching resources without prompting
    List(SearchArgs),

    /// Print the contents of a resource
    Show(ShowArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by the search and list commands
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                  Search with the configured pattern:\n    scheme-editor search\n\n\
                  Search with a glob:\n    scheme-editor search '*.tmTheme'\n\n\
                  Search with a regular expression:\n    scheme-editor search --regex 'Packages/User/.*'\n\n\
                  Include copies hidden by overrides:\n    scheme-editor list --all")]
pub struct SearchArgs {
    /// Glob or regex (defaults to the configured pattern, then *.tmTheme)
    pub pattern: Option<String>,

    /// Treat the pattern as a regular expression
    #[arg(long, short = 'r')]
    pub regex: bool,

    /// Include resources hidden by overriding packages
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print a theme from an archive:\n    scheme-editor show 'Packages/Theme - Default/Default.tmTheme'")]
pub struct ShowArgs {
    /// Resource path, e.g. Packages/<Package>/<file>
    pub path: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    scheme-editor completions --shell bash > ~/.bash_completion.d/scheme-editor\n\n\
                  Generate zsh completions:\n    scheme-editor completions --shell zsh > ~/.zfunc/_scheme-editor")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

//! Version command implementation

use scheme_editor::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("scheme-editor {}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Archive extension: .{}", scheme_editor::archive::ARCHIVE_EXTENSION);

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

//! Show command: print a resource's contents

use scheme_editor::error::Result;
use scheme_editor::{FsResolver, PackageRoots};
use std::io::{self, Write};

use crate::cli::ShowArgs;

/// Run show command
pub fn run(roots: PackageRoots, args: &ShowArgs) -> Result<()> {
    let resolver = FsResolver::new(roots);
    let bytes = resolver.load_resource(&args.path)?;

    let mut out = io::stdout().lock();
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

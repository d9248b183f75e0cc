//! Configuration for Scheme Editor
//!
//! - [`roots`]: the three package roots a search walks
//! - [`settings`]: the user settings file (JSON with comments)

pub mod roots;
pub mod settings;

pub use roots::{PackageRoots, RootOverrides};
pub use settings::Settings;

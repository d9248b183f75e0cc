//! Terminal presentation layer
//!
//! - [`picker`]: the inquire-backed [`Presenter`](scheme_editor::Presenter)
//! - [`progress`]: a spinner shown while packages are scanned
//! - [`format`]: row and diagnostic formatting

pub mod format;
pub mod picker;
pub mod progress;

pub use picker::InquirePresenter;
pub use progress::Spinner;

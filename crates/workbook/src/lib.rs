//! Spreadsheet loading and context preparation.
//!
//! Turns downloaded spreadsheet bytes into an in-memory [`Workbook`],
//! picks the sheets worth showing to the extraction oracle, and renders
//! them into one text context under a hard character budget.

mod context;
mod error;
mod loader;
mod select;

pub use context::{build_context, MAX_CONTEXT_CHARS};
pub use error::LoadError;
pub use loader::{load_workbook, Sheet, Workbook};
pub use select::select_sheets;

//! Template and export generation.
//!
//! Templates carry exactly the canonical header row; exports render every
//! canonical column with `DD.MM.YYYY` dates and line-break-joined lists.
//! An unedited export re-imports as all-skipped: the exact header path
//! maps every column and reconciliation finds every row already stored.

mod error;
mod render;
mod template;

pub use error::ExportError;
pub use render::{export_attendance, export_competitions, export_members, export_results};
pub use template::template;

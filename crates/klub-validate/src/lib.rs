//! Row validation: coerces one mapped row into a normalized record or a
//! list of human-readable problems. Validation never raises; all problems
//! for a row are accumulated so one submission surfaces every correction
//! needed in one pass.

pub mod coerce;
mod rows;

pub use rows::{
    RowResult, validate_attendance, validate_competition, validate_member, validate_result,
};

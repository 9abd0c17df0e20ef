use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One member's attendance mark for one training date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Member display name as written in the source document.
    pub member_name: String,
    pub date: NaiveDate,
    pub present: bool,
    pub note: String,
}

impl Attendance {
    /// Natural key: one mark per member per date.
    pub fn key(&self) -> (String, NaiveDate) {
        (self.member_name.trim().to_lowercase(), self.date)
    }
}

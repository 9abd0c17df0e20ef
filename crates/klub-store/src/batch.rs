use klub_model::{Attendance, Competition, CompetitionResult, Member};

/// The writes of one reconciled import, staged in memory until the engine
/// commits them in a single transaction.
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    pub create_competitions: Vec<Competition>,
    /// Merged competitions to write back (merge policy only).
    pub update_competitions: Vec<Competition>,
    pub create_results: Vec<CompetitionResult>,
    pub create_members: Vec<Member>,
    pub create_attendance: Vec<Attendance>,
}

impl WriteBatch {
    pub fn is_empty(&self) -> bool {
        self.create_competitions.is_empty()
            && self.update_competitions.is_empty()
            && self.create_results.is_empty()
            && self.create_members.is_empty()
            && self.create_attendance.is_empty()
    }

    pub fn write_count(&self) -> usize {
        self.create_competitions.len()
            + self.update_competitions.len()
            + self.create_results.len()
            + self.create_members.len()
            + self.create_attendance.len()
    }
}

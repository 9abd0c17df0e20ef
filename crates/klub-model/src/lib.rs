pub mod attendance;
pub mod competition;
pub mod fields;
pub mod member;
pub mod report;
pub mod result;

pub use attendance::Attendance;
pub use competition::Competition;
pub use fields::{
    AttendanceField, CanonicalField, CompetitionField, FieldKind, MemberField, ResultField,
    SchemaVersion,
};
pub use member::{Member, MemberDocument, MemberId, MemberKey};
pub use report::{ImportReport, RowError, RowOutcome, RowStatus};
pub use result::{CompetitionResult, Medal};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Surrogate identifier assigned by the store. Never used for
/// deduplication; see [`MemberKey`] for the natural key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MemberId(pub u64);

/// Natural key for a member: name parts plus date of birth, compared
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberKey {
    pub last_name: String,
    pub first_name: String,
    pub date_of_birth: Option<NaiveDate>,
}

/// A document attached to a member record (medical certificate, consent
/// form...). Uploading a new document of the same kind supersedes the prior
/// one for status display; history is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDocument {
    /// Kind tag, e.g. "liječnička potvrda".
    pub kind: String,
    /// Stored path of the uploaded file.
    pub path: String,
    pub uploaded_at: DateTime<Utc>,
    pub expires_on: Option<NaiveDate>,
}

impl MemberDocument {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.is_some_and(|expiry| expiry < today)
    }
}

/// A club person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub phone: String,
    pub guardian_email: String,
    pub guardian_phone: String,
    /// Membership group label, e.g. "kadeti".
    pub group: String,
    pub documents: Vec<MemberDocument>,
}

impl Member {
    pub fn key(&self) -> MemberKey {
        MemberKey {
            last_name: self.last_name.trim().to_lowercase(),
            first_name: self.first_name.trim().to_lowercase(),
            date_of_birth: self.date_of_birth,
        }
    }

    /// Display name in document order: "Ime Prezime".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// The active document of a kind: the most recently uploaded one.
    /// At most one document per kind is active at any time.
    pub fn active_document(&self, kind: &str) -> Option<&MemberDocument> {
        self.documents
            .iter()
            .filter(|doc| doc.kind.eq_ignore_ascii_case(kind))
            .max_by_key(|doc| doc.uploaded_at)
    }
}

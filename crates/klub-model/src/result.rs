use serde::{Deserialize, Serialize};
use std::fmt;

use crate::member::MemberId;

/// Medal tier awarded for a placement. Blank and placeholder cells in
/// imported documents normalize to [`Medal::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    #[default]
    None,
}

impl Medal {
    /// Parse a spreadsheet cell into a medal tier.
    ///
    /// Accepts Croatian and English spellings plus the numeric shorthand
    /// used by some legacy exports. Returns `None` (the Option, not the
    /// variant) for values that are not recognizable as any tier.
    pub fn parse(raw: &str) -> Option<Medal> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "" | "-" | "/" | "ne" | "no" | "bez medalje" | "none" => Some(Medal::None),
            "zlato" | "zlatna" | "gold" | "1" | "1." => Some(Medal::Gold),
            "srebro" | "srebrna" | "silver" | "2" | "2." => Some(Medal::Silver),
            "bronca" | "broncana" | "brončana" | "bronze" | "3" | "3." => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "zlato",
            Medal::Silver => "srebro",
            Medal::Bronze => "bronca",
            Medal::None => "",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One participant's performance at one competition.
///
/// Owned by exactly one [`Competition`](crate::Competition), referenced by
/// its sequence number; deleting the competition deletes its results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitionResult {
    /// Natural key of the owning competition.
    pub competition_number: u32,
    /// Participant display name as written in the source document.
    pub participant: String,
    /// Canonical member record, when one reconciles to this name.
    pub member_id: Option<MemberId>,
    /// Weight/age category.
    pub category: String,
    pub bouts: u32,
    pub wins: u32,
    pub losses: u32,
    /// Opponent descriptions for each win, in bout order.
    pub wins_against: Vec<String>,
    /// Opponent descriptions for each loss, in bout order.
    pub losses_against: Vec<String>,
    pub placement: String,
    pub medal: Medal,
}

impl CompetitionResult {
    /// Deduplication key within the store: one row per participant and
    /// category per competition.
    pub fn dedupe_key(&self) -> (u32, String, String) {
        (
            self.competition_number,
            self.participant.trim().to_lowercase(),
            self.category.trim().to_lowercase(),
        )
    }
}

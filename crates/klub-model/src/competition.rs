use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One competition the club took part in.
///
/// The natural key is `number`, a sequence number unique across all
/// competitions. It is supplied by the importer for known historical data
/// and assigned by the system otherwise; surrogate storage identifiers are
/// never used for deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    /// Sequence number, unique across all competitions.
    pub number: u32,
    pub year: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Kind of event (tournament, league round, championship...).
    pub kind: String,
    pub name: Option<String>,
    /// Wrestling style (greco-roman, freestyle...).
    pub style: String,
    pub place: String,
    pub country: String,
    pub country_code: String,
    /// Count of home-club participants.
    pub participants: u32,
    pub team_ranking: String,
    pub coaches: String,
    pub notes: String,
    pub links: String,
    /// Ordered stored image paths. Merges append, never replace.
    pub image_paths: Vec<String>,
    pub announcement: String,
}

impl Competition {
    /// Merge another record for the same natural key into this one without
    /// destroying existing data: blank scalar fields are filled from `other`
    /// and unseen image paths are appended in order.
    ///
    /// Returns true if anything changed.
    pub fn merge_from(&mut self, other: &Competition) -> bool {
        let mut changed = false;
        changed |= fill_text(&mut self.kind, &other.kind);
        changed |= fill_text(&mut self.style, &other.style);
        changed |= fill_text(&mut self.place, &other.place);
        changed |= fill_text(&mut self.country, &other.country);
        changed |= fill_text(&mut self.country_code, &other.country_code);
        changed |= fill_text(&mut self.team_ranking, &other.team_ranking);
        changed |= fill_text(&mut self.coaches, &other.coaches);
        changed |= fill_text(&mut self.notes, &other.notes);
        changed |= fill_text(&mut self.links, &other.links);
        changed |= fill_text(&mut self.announcement, &other.announcement);
        if self.name.is_none() && other.name.is_some() {
            self.name = other.name.clone();
            changed = true;
        }
        if self.year == 0 && other.year != 0 {
            self.year = other.year;
            changed = true;
        }
        if self.start_date.is_none() && other.start_date.is_some() {
            self.start_date = other.start_date;
            changed = true;
        }
        if self.end_date.is_none() && other.end_date.is_some() {
            self.end_date = other.end_date;
            changed = true;
        }
        if self.participants == 0 && other.participants != 0 {
            self.participants = other.participants;
            changed = true;
        }
        for path in &other.image_paths {
            if !self.image_paths.contains(path) {
                self.image_paths.push(path.clone());
                changed = true;
            }
        }
        changed
    }
}

fn fill_text(target: &mut String, source: &str) -> bool {
    if target.trim().is_empty() && !source.trim().is_empty() {
        *target = source.to_string();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_appends_images_and_fills_blanks() {
        let mut existing = Competition {
            number: 12,
            place: "Zagreb".to_string(),
            image_paths: vec!["img/a.jpg".to_string()],
            ..Competition::default()
        };
        let incoming = Competition {
            number: 12,
            place: "Koprivnica".to_string(),
            coaches: "I. Novak".to_string(),
            image_paths: vec!["img/a.jpg".to_string(), "img/b.jpg".to_string()],
            ..Competition::default()
        };
        assert!(existing.merge_from(&incoming));
        // Existing non-blank fields are authoritative.
        assert_eq!(existing.place, "Zagreb");
        assert_eq!(existing.coaches, "I. Novak");
        assert_eq!(existing.image_paths, vec!["img/a.jpg", "img/b.jpg"]);
    }

    #[test]
    fn merge_without_new_data_reports_no_change() {
        let mut existing = Competition {
            number: 3,
            place: "Osijek".to_string(),
            ..Competition::default()
        };
        let incoming = existing.clone();
        assert!(!existing.merge_from(&incoming));
    }
}

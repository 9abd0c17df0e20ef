//! Typed canonical-field enumerations.
//!
//! Every external document is mapped onto one of these fixed field sets
//! before any row is validated. Column lookup by ad-hoc string key is
//! deliberately impossible: an unmapped field is reported, never guessed.

use serde::{Deserialize, Serialize};

/// Which generation of column vocabulary to match against.
///
/// `Current` covers the club's own templates and reasonable hand-authored
/// variations. `Legacy` additionally knows the abbreviated column names of
/// the old tools the club exported tables from. New legacy formats are
/// added here, not as copy-pasted matching logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    Current,
    Legacy,
}

/// Semantic type a canonical field coerces to. The fixed set is
/// intentional; anything richer belongs to a real ETL tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Permissive or strict integer depending on the field's business rule.
    Integer,
    Text,
    Date,
    /// Multi-line cell split into an ordered list of non-empty lines.
    Lines,
}

/// A canonical field of one entity's import schema.
///
/// Implementors are plain enums; the trait gives the header mapper and the
/// template generator one shared description of each schema.
pub trait CanonicalField: Copy + Eq + Ord + std::fmt::Debug + 'static {
    /// Entity name used in diagnostics.
    const ENTITY: &'static str;
    /// All fields in canonical column order.
    const ALL: &'static [Self];

    /// Canonical header text as printed in templates and exports.
    fn header(self) -> &'static str;

    /// Whether an import may proceed without this field mapped.
    fn required(self) -> bool;

    fn kind(self) -> FieldKind;

    /// Ordered keyword fragments for fallback matching, most specific
    /// first. Matching is case-insensitive substring containment.
    fn keywords(self, version: SchemaVersion) -> &'static [&'static str];
}

/// Import schema for [`Competition`](crate::Competition) documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompetitionField {
    Number,
    Year,
    StartDate,
    EndDate,
    Kind,
    Name,
    Style,
    Place,
    Country,
    CountryCode,
    Participants,
    TeamRanking,
    Coaches,
    Notes,
    Links,
    Images,
    Announcement,
}

impl CanonicalField for CompetitionField {
    const ENTITY: &'static str = "competition";
    const ALL: &'static [Self] = &[
        Self::Number,
        Self::Year,
        Self::StartDate,
        Self::EndDate,
        Self::Kind,
        Self::Name,
        Self::Style,
        Self::Place,
        Self::Country,
        Self::CountryCode,
        Self::Participants,
        Self::TeamRanking,
        Self::Coaches,
        Self::Notes,
        Self::Links,
        Self::Images,
        Self::Announcement,
    ];

    fn header(self) -> &'static str {
        match self {
            Self::Number => "Redni broj",
            Self::Year => "Godina",
            Self::StartDate => "Datum početka",
            Self::EndDate => "Datum završetka",
            Self::Kind => "Vrsta natjecanja",
            Self::Name => "Naziv natjecanja",
            Self::Style => "Stil",
            Self::Place => "Mjesto",
            Self::Country => "Država",
            Self::CountryCode => "Oznaka države",
            Self::Participants => "Broj naših natjecatelja",
            Self::TeamRanking => "Ekipni poredak",
            Self::Coaches => "Treneri",
            Self::Notes => "Napomena",
            Self::Links => "Poveznice",
            Self::Images => "Slike",
            Self::Announcement => "Najava",
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::Number | Self::Year | Self::Place)
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Number | Self::Year | Self::Participants => FieldKind::Integer,
            Self::StartDate | Self::EndDate => FieldKind::Date,
            Self::Images => FieldKind::Lines,
            _ => FieldKind::Text,
        }
    }

    fn keywords(self, version: SchemaVersion) -> &'static [&'static str] {
        match (self, version) {
            (Self::Number, SchemaVersion::Current) => &["redni broj", "red. br", "rbr", "seq"],
            (Self::Number, SchemaVersion::Legacy) => {
                &["redni broj", "rbr", "redbr", "br natj", "sifra", "šifra"]
            }
            (Self::Year, SchemaVersion::Current) => &["godina", "god", "year"],
            (Self::Year, SchemaVersion::Legacy) => &["godina", "god", "year"],
            (Self::StartDate, SchemaVersion::Current) => {
                &["datum početka", "datum pocetka", "početak", "pocetak", "start"]
            }
            (Self::StartDate, SchemaVersion::Legacy) => {
                &["dat_od", "datum od", "pocetak", "početak", "start"]
            }
            (Self::EndDate, SchemaVersion::Current) => {
                &["datum završetka", "datum zavrsetka", "završetak", "zavrsetak", "kraj"]
            }
            (Self::EndDate, SchemaVersion::Legacy) => {
                &["dat_do", "datum do", "zavrsetak", "završetak", "kraj"]
            }
            (Self::Kind, _) => &["vrsta", "tip natjecanja", "kind", "type"],
            (Self::Name, _) => &["naziv", "ime natjecanja", "name"],
            (Self::Style, _) => &["stil", "style", "način", "nacin"],
            (Self::Place, SchemaVersion::Current) => &["mjesto", "grad", "place", "city"],
            (Self::Place, SchemaVersion::Legacy) => &["mjesto", "mj_odr", "grad", "place"],
            (Self::Country, _) => &["država", "drzava", "zemlja", "country"],
            (Self::CountryCode, _) => &["oznaka", "kratica", "country code", "iso"],
            (Self::Participants, _) => {
                &["broj naših", "broj nasih", "natjecatelja", "participants"]
            }
            (Self::TeamRanking, _) => &["ekipni", "ekipa", "team"],
            (Self::Coaches, _) => &["trener", "coach"],
            (Self::Notes, _) => &["napomena", "bilješke", "biljeske", "notes"],
            (Self::Links, _) => &["poveznic", "link", "url"],
            (Self::Images, _) => &["slik", "fotografij", "photo", "image"],
            (Self::Announcement, _) => &["najava", "announcement"],
        }
    }
}

/// Import schema for [`CompetitionResult`](crate::CompetitionResult)
/// documents. One row per participant per competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResultField {
    CompetitionNumber,
    Participant,
    Category,
    Bouts,
    Wins,
    Losses,
    WinsAgainst,
    LossesAgainst,
    Placement,
    Medal,
}

impl CanonicalField for ResultField {
    const ENTITY: &'static str = "result";
    const ALL: &'static [Self] = &[
        Self::CompetitionNumber,
        Self::Participant,
        Self::Category,
        Self::Bouts,
        Self::Wins,
        Self::Losses,
        Self::WinsAgainst,
        Self::LossesAgainst,
        Self::Placement,
        Self::Medal,
    ];

    fn header(self) -> &'static str {
        match self {
            Self::CompetitionNumber => "Redni broj natjecanja",
            Self::Participant => "Ime i prezime",
            Self::Category => "Kategorija",
            Self::Bouts => "Broj borbi",
            Self::Wins => "Pobjede",
            Self::Losses => "Porazi",
            Self::WinsAgainst => "Pobjede protiv",
            Self::LossesAgainst => "Porazi protiv",
            Self::Placement => "Plasman",
            Self::Medal => "Medalja",
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::CompetitionNumber | Self::Participant)
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::CompetitionNumber | Self::Bouts | Self::Wins | Self::Losses => {
                FieldKind::Integer
            }
            Self::WinsAgainst | Self::LossesAgainst => FieldKind::Lines,
            _ => FieldKind::Text,
        }
    }

    fn keywords(self, version: SchemaVersion) -> &'static [&'static str] {
        match (self, version) {
            (Self::CompetitionNumber, SchemaVersion::Current) => {
                &["redni broj", "broj natjecanja", "natjecanje", "competition"]
            }
            (Self::CompetitionNumber, SchemaVersion::Legacy) => {
                &["rbr", "redbr", "br natj", "natjecanje", "id_natj"]
            }
            (Self::Participant, SchemaVersion::Current) => {
                &["ime i prezime", "natjecatelj", "hrvač", "hrvac", "wrestler"]
            }
            (Self::Participant, SchemaVersion::Legacy) => {
                &["ime i prezime", "imeprez", "natjecatelj", "clan", "član"]
            }
            (Self::Category, _) => &["kategorij", "težinska", "tezinska", "kg", "weight"],
            (Self::Bouts, _) => &["broj borbi", "borbi", "borbe", "bouts"],
            (Self::Wins, _) => &["broj pobjeda", "pobjeda", "wins"],
            (Self::Losses, _) => &["broj poraza", "poraza", "losses"],
            (Self::WinsAgainst, _) => &["pobjede protiv", "pobijedio", "defeated"],
            (Self::LossesAgainst, _) => &["porazi protiv", "izgubio", "lost to"],
            (Self::Placement, _) => &["plasman", "poredak", "placement", "rank"],
            (Self::Medal, _) => &["medalj", "odličje", "odlicje", "medal"],
        }
    }
}

/// Import schema for [`Member`](crate::Member) documents. Last name comes
/// first, the order club rosters are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemberField {
    LastName,
    FirstName,
    DateOfBirth,
    Group,
    Email,
    Phone,
    GuardianEmail,
    GuardianPhone,
}

impl CanonicalField for MemberField {
    const ENTITY: &'static str = "member";
    const ALL: &'static [Self] = &[
        Self::LastName,
        Self::FirstName,
        Self::DateOfBirth,
        Self::Group,
        Self::Email,
        Self::Phone,
        Self::GuardianEmail,
        Self::GuardianPhone,
    ];

    fn header(self) -> &'static str {
        match self {
            Self::LastName => "Prezime",
            Self::FirstName => "Ime",
            Self::DateOfBirth => "Datum rođenja",
            Self::Group => "Grupa",
            Self::Email => "E-mail",
            Self::Phone => "Kontakt broj",
            Self::GuardianEmail => "E-mail roditelja",
            Self::GuardianPhone => "Kontakt roditelja",
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::LastName | Self::FirstName)
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::DateOfBirth => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    fn keywords(self, version: SchemaVersion) -> &'static [&'static str] {
        match (self, version) {
            (Self::LastName, _) => &["prezime", "last name", "surname"],
            (Self::FirstName, _) => &["ime", "first name"],
            (Self::DateOfBirth, SchemaVersion::Current) => {
                &["rođenja", "rodjenja", "datum rod", "birth", "dob"]
            }
            (Self::DateOfBirth, SchemaVersion::Legacy) => {
                &["dat_rod", "rođenja", "rodjenja", "god rod", "birth"]
            }
            (Self::Group, _) => &["grupa", "skupina", "group"],
            (Self::Email, _) => &["e-mail", "email", "e-pošta", "e-posta", "mail"],
            (Self::Phone, _) => &["kontakt", "telefon", "mobitel", "phone"],
            (Self::GuardianEmail, _) => {
                &["e-mail roditelja", "mail roditelja", "guardian email"]
            }
            (Self::GuardianPhone, _) => {
                &["kontakt roditelja", "broj roditelja", "guardian phone"]
            }
        }
    }
}

/// Import schema for [`Attendance`](crate::Attendance) documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttendanceField {
    MemberName,
    Date,
    Present,
    Note,
}

impl CanonicalField for AttendanceField {
    const ENTITY: &'static str = "attendance";
    const ALL: &'static [Self] = &[Self::MemberName, Self::Date, Self::Present, Self::Note];

    fn header(self) -> &'static str {
        match self {
            Self::MemberName => "Ime i prezime",
            Self::Date => "Datum",
            Self::Present => "Prisutan",
            Self::Note => "Napomena",
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::MemberName | Self::Date)
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Date => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    fn keywords(self, version: SchemaVersion) -> &'static [&'static str] {
        match (self, version) {
            (Self::MemberName, _) => &["ime i prezime", "član", "clan", "member"],
            (Self::Date, SchemaVersion::Current) => &["datum", "date"],
            (Self::Date, SchemaVersion::Legacy) => &["datum", "dat", "date"],
            (Self::Present, _) => &["prisut", "dolazak", "present", "attend"],
            (Self::Note, _) => &["napomena", "note", "comment"],
        }
    }
}

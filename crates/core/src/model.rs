//! Royalty record data model.
//!
//! A [`RoyaltyRecord`] is built once by the synthesizer and never mutated.
//! Money values are exact decimals so that
//! `monthly_earnings == monthly_units * book_price * royalty_rate` holds
//! without rounding drift; rounding only happens when a row is rendered.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Distribution channel the audiobook is sold through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "ACX Exclusive")]
    AcxExclusive,
    #[serde(rename = "ACX Royalty Share")]
    AcxRoyaltyShare,
    #[serde(rename = "Findaway")]
    Findaway,
    #[serde(rename = "BookFunnel")]
    BookFunnel,
    /// Spotify, and the catch-all for AYCL subscription channels.
    #[serde(rename = "Spotify")]
    Spotify,
}

impl Platform {
    /// Every platform, in the order they are offered to the sampler.
    pub const ALL: [Platform; 5] = [
        Self::AcxExclusive,
        Self::AcxRoyaltyShare,
        Self::Findaway,
        Self::BookFunnel,
        Self::Spotify,
    ];

    /// Spreadsheet label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AcxExclusive => "ACX Exclusive",
            Self::AcxRoyaltyShare => "ACX Royalty Share",
            Self::Findaway => "Findaway",
            Self::BookFunnel => "BookFunnel",
            Self::Spotify => "Spotify",
        }
    }

    /// ACX Royalty Share pays author and narrator out of the same royalty.
    #[must_use]
    pub const fn is_royalty_share(&self) -> bool {
        matches!(self, Self::AcxRoyaltyShare)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Narrator roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Narrator(&'static str);

impl Narrator {
    /// Synthetic voice; production is either bundled or cheap.
    pub const AI: Narrator = Narrator("AI Narrator");

    /// Full roster the sampler draws from.
    pub const ROSTER: [Narrator; 8] = [
        Self::AI,
        Narrator("Evelyn Hart"),
        Narrator("Marcus Bell"),
        Narrator("Priya Raman"),
        Narrator("Jonah Whitaker"),
        Narrator("Claire Dumont"),
        Narrator("Tobias Reyes"),
        Narrator("Nadia Okafor"),
    ];

    /// Narrators billing at premium rates.
    pub const HIGH_END: [Narrator; 3] = [
        Narrator("Evelyn Hart"),
        Narrator("Jonah Whitaker"),
        Narrator("Nadia Okafor"),
    ];

    /// Looks up a roster entry by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Narrator> {
        Self::ROSTER.iter().copied().find(|n| n.0 == name)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        *self == Self::AI
    }

    #[must_use]
    pub fn is_high_end(&self) -> bool {
        Self::HIGH_END.contains(self)
    }
}

impl fmt::Display for Narrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Narrator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Months of earnings needed to recoup production cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEven {
    /// Finite horizon in months (real-valued).
    Months(Decimal),
    /// Not computable: no earnings, or a royalty rate too low to recoup.
    Unknown,
}

impl BreakEven {
    #[must_use]
    pub const fn months(&self) -> Option<Decimal> {
        match self {
            Self::Months(m) => Some(*m),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Months(_))
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(m) => write!(f, "{}", m.round_dp(1)),
            Self::Unknown => f.write_str("Never"),
        }
    }
}

impl Serialize for BreakEven {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Where a title stands relative to recouping its production cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakEvenStatus {
    #[serde(rename = "Already Profitable")]
    AlreadyProfitable,
    #[serde(rename = "Unclear – No Earnings Yet")]
    Unclear,
    #[serde(rename = "Unlikely")]
    Unlikely,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Broken Even")]
    BrokenEven,
}

impl BreakEvenStatus {
    pub const ALL: [BreakEvenStatus; 5] = [
        Self::AlreadyProfitable,
        Self::Unclear,
        Self::Unlikely,
        Self::InProgress,
        Self::BrokenEven,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AlreadyProfitable => "Already Profitable",
            Self::Unclear => "Unclear – No Earnings Yet",
            Self::Unlikely => "Unlikely",
            Self::InProgress => "In Progress",
            Self::BrokenEven => "Broken Even",
        }
    }

    /// True while production cost is still outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Unclear | Self::Unlikely | Self::InProgress)
    }
}

impl fmt::Display for BreakEvenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived risk/performance labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationFlags {
    #[serde(rename = "Loss Leader")]
    pub loss_leader: bool,
    #[serde(rename = "Risky Combo")]
    pub risky_combo: bool,
    #[serde(rename = "Overachiever")]
    pub overachiever: bool,
    /// Only ever set for ACX Royalty Share titles.
    #[serde(rename = "Platform Risk")]
    pub platform_risk: bool,
}

/// One generated royalty row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoyaltyRecord {
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Book Title")]
    pub book_title: String,
    #[serde(rename = "Audiobook Release Date")]
    pub release_date: NaiveDate,
    #[serde(rename = "Platform")]
    pub platform: Platform,
    #[serde(rename = "Book Price")]
    pub book_price: Decimal,
    #[serde(rename = "Narrator")]
    pub narrator: Narrator,
    #[serde(rename = "Uses AI Narrator")]
    pub uses_ai: bool,
    #[serde(rename = "Narrator Split")]
    pub narrator_split: bool,
    #[serde(rename = "Monthly Units")]
    pub monthly_units: u32,
    #[serde(rename = "New Release Boost")]
    pub new_release_boost: bool,
    #[serde(rename = "Production Cost")]
    pub production_cost: Decimal,
    #[serde(rename = "Royalty Rate")]
    pub royalty_rate: Decimal,
    #[serde(rename = "Monthly Earnings")]
    pub monthly_earnings: Decimal,
    #[serde(rename = "Months Since Release")]
    pub months_since_release: i64,
    #[serde(rename = "Months to Break Even")]
    pub break_even: BreakEven,
    #[serde(rename = "Break Even Status")]
    pub break_even_status: BreakEvenStatus,
    #[serde(rename = "Break Even Date")]
    pub break_even_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub flags: ClassificationFlags,
}

impl RoyaltyRecord {
    /// Header row, in the same order as [`RoyaltyRecord::to_row`].
    pub const COLUMNS: [&'static str; 21] = [
        "Author",
        "Book Title",
        "Audiobook Release Date",
        "Platform",
        "Book Price",
        "Narrator",
        "Uses AI Narrator",
        "Narrator Split",
        "Monthly Units",
        "New Release Boost",
        "Production Cost",
        "Royalty Rate",
        "Monthly Earnings",
        "Months Since Release",
        "Months to Break Even",
        "Break Even Status",
        "Break Even Date",
        "Loss Leader",
        "Risky Combo",
        "Overachiever",
        "Platform Risk",
    ];

    /// Renders the record as display strings.
    ///
    /// Currency is shown to 2 decimal places and the break-even horizon to 1.
    /// The royalty rate is shown exactly as evaluated, so a halved rate keeps
    /// its fifth decimal. Unknown horizons and dates render as "Never" and
    /// "Unknown".
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.author.clone(),
            self.book_title.clone(),
            self.release_date.format("%Y-%m-%d").to_string(),
            self.platform.to_string(),
            format!("{:.2}", self.book_price),
            self.narrator.to_string(),
            bool_cell(self.uses_ai),
            bool_cell(self.narrator_split),
            self.monthly_units.to_string(),
            bool_cell(self.new_release_boost),
            format!("{:.2}", self.production_cost),
            self.royalty_rate.normalize().to_string(),
            format!("{:.2}", self.monthly_earnings),
            self.months_since_release.to_string(),
            self.break_even.to_string(),
            self.break_even_status.to_string(),
            self.break_even_date
                .map_or_else(|| "Unknown".to_string(), |d| d.format("%Y-%m-%d").to_string()),
            bool_cell(self.flags.loss_leader),
            bool_cell(self.flags.risky_combo),
            bool_cell(self.flags.overachiever),
            bool_cell(self.flags.platform_risk),
        ]
    }
}

fn bool_cell(value: bool) -> String {
    let cell = if value { "TRUE" } else { "FALSE" };
    cell.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_record() -> RoyaltyRecord {
        RoyaltyRecord {
            author: "Ada Quill".to_string(),
            book_title: "The quiet harbor light.".to_string(),
            release_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            platform: Platform::AcxExclusive,
            book_price: dec!(10.00),
            narrator: Narrator::from_name("Marcus Bell").unwrap(),
            uses_ai: false,
            narrator_split: false,
            monthly_units: 500,
            new_release_boost: false,
            production_cost: dec!(1000),
            royalty_rate: dec!(0.40),
            monthly_earnings: dec!(2000.000),
            months_since_release: 12,
            break_even: BreakEven::Months(dec!(0.5)),
            break_even_status: BreakEvenStatus::BrokenEven,
            break_even_date: NaiveDate::from_ymd_opt(2025, 1, 30),
            flags: ClassificationFlags::default(),
        }
    }

    #[test]
    fn platform_labels_match_spreadsheet_values() {
        let labels: Vec<_> = Platform::ALL.iter().map(Platform::label).collect();
        assert_eq!(
            labels,
            vec!["ACX Exclusive", "ACX Royalty Share", "Findaway", "BookFunnel", "Spotify"]
        );
        assert!(Platform::AcxRoyaltyShare.is_royalty_share());
        assert!(!Platform::AcxExclusive.is_royalty_share());
    }

    #[test]
    fn narrator_roster_contains_ai_and_high_end_subset() {
        assert!(Narrator::ROSTER.contains(&Narrator::AI));
        assert!(Narrator::AI.is_ai());
        assert!(!Narrator::AI.is_high_end());
        for narrator in Narrator::HIGH_END {
            assert!(Narrator::ROSTER.contains(&narrator));
            assert!(!narrator.is_ai());
        }
        assert_eq!(Narrator::from_name("Nobody"), None);
    }

    #[test]
    fn break_even_display() {
        assert_eq!(BreakEven::Months(dec!(0.5)).to_string(), "0.5");
        assert_eq!(BreakEven::Months(dec!(2.3333333)).to_string(), "2.3");
        assert_eq!(BreakEven::Unknown.to_string(), "Never");
        assert_eq!(BreakEven::Unknown.months(), None);
        assert!(BreakEven::Months(dec!(0)).is_known());
    }

    #[test]
    fn status_labels_and_pending() {
        assert_eq!(BreakEvenStatus::Unclear.to_string(), "Unclear – No Earnings Yet");
        assert!(BreakEvenStatus::InProgress.is_pending());
        assert!(BreakEvenStatus::Unlikely.is_pending());
        assert!(!BreakEvenStatus::BrokenEven.is_pending());
        assert!(!BreakEvenStatus::AlreadyProfitable.is_pending());
    }

    #[test]
    fn row_matches_column_count_and_rounding() {
        let record = sample_record();
        let row = record.to_row();
        assert_eq!(row.len(), RoyaltyRecord::COLUMNS.len());
        assert_eq!(row[2], "2025-01-15");
        assert_eq!(row[4], "10.00");
        assert_eq!(row[11], "0.4");
        assert_eq!(row[12], "2000.00");
        assert_eq!(row[14], "0.5");
        assert_eq!(row[15], "Broken Even");
        assert_eq!(row[16], "2025-01-30");
        assert_eq!(row[20], "FALSE");
    }

    #[test]
    fn halved_rate_keeps_full_precision() {
        let record = RoyaltyRecord {
            platform: Platform::Spotify,
            narrator_split: true,
            monthly_units: 60,
            royalty_rate: dec!(0.19995),
            break_even_status: BreakEvenStatus::Unlikely,
            ..sample_record()
        };
        let row = record.to_row();
        assert_eq!(row[11], "0.19995");
        assert_eq!(row[15], "Unlikely");
    }

    #[test]
    fn json_keys_follow_column_names() {
        let value = serde_json::to_value(sample_record()).unwrap();
        let object = value.as_object().unwrap();
        for column in RoyaltyRecord::COLUMNS {
            assert!(object.contains_key(column), "missing key {column}");
        }
        assert_eq!(object["Platform"], "ACX Exclusive");
        assert_eq!(object["Months to Break Even"], "0.5");
    }
}

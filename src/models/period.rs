//! Reporting period keys
//!
//! Dashboard record maps are keyed by human-readable period labels: month
//! labels like "January 2025" on the financial pages, bare year labels like
//! "2025" on the club-fund pages. `PeriodKey` gives those labels a total
//! chronological order so ranges can be sliced and reports rendered in
//! calendar order.

use std::cmp::Ordering;
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A parsed period label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKey {
    /// A month label, e.g. "January 2025"
    Month { year: i32, month: u32 },

    /// A year label, e.g. "2025"
    Year { year: i32 },
}

impl PeriodKey {
    /// Create a month key
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Create a year key
    pub fn year(year: i32) -> Self {
        Self::Year { year }
    }

    /// Parse a period label
    ///
    /// Year labels are plain integers ("2025"). Month labels are a month name
    /// followed by a year ("January 2025"); three-letter month abbreviations
    /// are accepted, case-insensitively. Anything else is `None` — invalid
    /// labels are excluded from sorted sequences rather than reported.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();

        if let Ok(year) = label.parse::<i32>() {
            return Some(Self::Year { year });
        }

        let mut parts = label.split_whitespace();
        let month_name = parts.next()?;
        let year_part = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let month = month_from_name(month_name)?;
        let year: i32 = year_part.parse().ok()?;

        Some(Self::Month { year, month })
    }

    /// The chronological sort key: `(year, month)` with bare years ordering
    /// at the start of their year
    fn chrono_value(&self) -> (i32, u32) {
        match self {
            Self::Month { year, month } => (*year, *month),
            Self::Year { year } => (*year, 0),
        }
    }
}

/// Resolve a month name (full or three-letter abbreviation) to 1-12
fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();

    for (idx, full) in MONTH_NAMES.iter().enumerate() {
        let full_lower = full.to_ascii_lowercase();
        if lower == full_lower || (lower.len() == 3 && full_lower.starts_with(&lower)) {
            return Some(idx as u32 + 1);
        }
    }

    None
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => {
                write!(f, "{} {}", MONTH_NAMES[(*month as usize) - 1], year)
            }
            Self::Year { year } => write!(f, "{}", year),
        }
    }
}

impl Ord for PeriodKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chrono_value().cmp(&other.chrono_value())
    }
}

impl PartialOrd for PeriodKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort period labels ascending by chronological value
///
/// Unparseable labels are silently discarded. The sort is stable, so labels
/// that parse to the same period keep their input order.
pub fn sort_labels<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed: Vec<(String, PeriodKey)> = labels
        .into_iter()
        .map(Into::into)
        .filter_map(|label| PeriodKey::parse(&label).map(|key| (label, key)))
        .collect();

    parsed.sort_by(|a, b| a.1.cmp(&b.1));
    parsed.into_iter().map(|(label, _)| label).collect()
}

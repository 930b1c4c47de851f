use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A persisted work-log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    pub id: i64,
    pub date: NaiveDate,           // ⇔ work_logs.date (TEXT "YYYY-MM-DD")
    pub hours: f64,                // ⇔ work_logs.hours (REAL)
    pub category: String,          // ⇔ work_logs.category (TEXT, taken literally)
    pub description: String,       // ⇔ work_logs.description (TEXT)
    pub created_at: NaiveDateTime, // ⇔ work_logs.created_at (UTC, set by SQLite)
}

impl WorkLogEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Client-supplied fields of an entry, as accepted by `POST /api/logs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewEntry {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(deserialize_with = "deserialize_hours")]
    pub hours: f64,
    pub category: String,
    pub description: String,
}

impl NewEntry {
    pub fn new(
        date: NaiveDate,
        hours: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            hours,
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Parse an entry date in the strict `YYYY-MM-DD` form.
///
/// The year must have exactly four digits so that dates, and the week keys
/// derived from them, order the same as strings and as calendar days.
pub fn parse_entry_date(value: &str) -> Result<NaiveDate, String> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });

    if !well_formed {
        return Err(format!("date must be YYYY-MM-DD, got '{value}'"));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("'{value}' is not a valid calendar date"))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_entry_date(&raw).map_err(de::Error::custom)
}

/// Browser forms post `hours` as a string ("7.5"), API clients as a number.
/// Both are accepted; anything else, or a non-finite value, is rejected.
fn deserialize_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawHours {
        Number(f64),
        Text(String),
    }

    let value = match RawHours::deserialize(deserializer)? {
        RawHours::Number(n) => n,
        RawHours::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("hours must be a number, got '{s}'")))?,
    };

    if !value.is_finite() {
        return Err(de::Error::custom("hours must be a finite number"));
    }

    Ok(value)
}

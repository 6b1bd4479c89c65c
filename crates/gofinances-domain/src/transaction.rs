//! Domain models for stored transaction records.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{
    de::{self, Deserializer, Visitor},
    Deserialize, Serialize,
};

/// A single movement of money as persisted by the front end.
///
/// Amounts are kept in their stored textual form; use [`TransactionRecord::amount_value`]
/// to obtain the parsed number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(deserialize_with = "amount_text")]
    pub amount: String,
    pub category: String,
    #[serde(deserialize_with = "calendar_date")]
    pub date: NaiveDate,
}

impl TransactionRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: TransactionType,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            amount: amount.to_string(),
            category: category.into(),
            date,
        }
    }

    /// Parsed amount, or `None` when the stored text is not a finite, non-negative number.
    pub fn amount_value(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
    }

    pub fn is_inflow(&self) -> bool {
        self.kind == TransactionType::Inflow
    }

    pub fn is_outflow(&self) -> bool {
        self.kind == TransactionType::Outflow
    }
}

/// Direction of a transaction. Stored as `"up"` / `"down"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "up", alias = "positive")]
    Inflow,
    #[serde(rename = "down", alias = "negative")]
    Outflow,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Inflow => "Inflow",
            TransactionType::Outflow => "Outflow",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" | "in" | "inflow" | "income" | "positive" => Ok(TransactionType::Inflow),
            "down" | "out" | "outflow" | "expense" | "negative" => Ok(TransactionType::Outflow),
            other => Err(format!("unknown transaction type `{other}`")),
        }
    }
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a numeric string or number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`")))
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp and keeps only the calendar date.
///
/// Timestamps are read on the local calendar, the same one [`Local`] gives new records.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    parse_calendar_date_in(raw, &Local)
}

/// Like [`parse_calendar_date`], with timestamps converted into `zone` before the
/// date is taken. Plain dates are kept as written.
pub fn parse_calendar_date_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|stamp| stamp.with_timezone(zone).date_naive())
        })
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn decodes_stored_record_with_legacy_fields() {
        let json = r#"{
            "id": "1623243751000",
            "name": "Hamburgueria",
            "type": "down",
            "amount": "59",
            "category": "food",
            "date": "2021-06-09T12:00:00.000Z"
        }"#;
        let record: TransactionRecord = serde_json::from_str(json).expect("decode record");

        assert_eq!(record.title, "Hamburgueria");
        assert_eq!(record.kind, TransactionType::Outflow);
        assert_eq!(record.amount_value(), Some(59.0));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2021, 6, 9).unwrap());
    }

    #[test]
    fn accepts_numeric_amounts_and_positive_negative_spellings() {
        let json = r#"{"id":"2","title":"Site","type":"positive","amount":12000,"category":"salary","date":"2021-06-08"}"#;
        let record: TransactionRecord = serde_json::from_str(json).expect("decode record");

        assert_eq!(record.kind, TransactionType::Inflow);
        assert_eq!(record.amount, "12000");
    }

    #[test]
    fn writes_storage_spellings() {
        let record = TransactionRecord::new(
            "3",
            "Aluguel",
            TransactionType::Outflow,
            800.0,
            "housing",
            NaiveDate::from_ymd_opt(2021, 6, 9).unwrap(),
        );
        let json = serde_json::to_string(&record).expect("encode record");

        assert!(json.contains(r#""type":"down""#));
        assert!(json.contains(r#""amount":"800""#));
        assert!(json.contains(r#""date":"2021-06-09""#));
    }

    #[test]
    fn rejects_unparseable_and_negative_amounts() {
        let mut record = TransactionRecord::new(
            "4",
            "Broken",
            TransactionType::Inflow,
            0.0,
            "salary",
            NaiveDate::from_ymd_opt(2021, 6, 9).unwrap(),
        );
        record.amount = "12,50".into();
        assert_eq!(record.amount_value(), None);
        record.amount = "-3".into();
        assert_eq!(record.amount_value(), None);
        record.amount = "NaN".into();
        assert_eq!(record.amount_value(), None);
    }

    #[test]
    fn late_evening_timestamps_stay_on_the_local_day() {
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();
        let raw = "2021-05-01T01:00:00.000Z";

        assert_eq!(
            parse_calendar_date_in(raw, &sao_paulo),
            NaiveDate::from_ymd_opt(2021, 4, 30)
        );
        assert_eq!(
            parse_calendar_date_in(raw, &Utc),
            NaiveDate::from_ymd_opt(2021, 5, 1)
        );
        assert_eq!(
            parse_calendar_date_in("2021-05-01", &sao_paulo),
            NaiveDate::from_ymd_opt(2021, 5, 1)
        );
    }

    #[test]
    fn stored_timestamps_use_the_local_calendar() {
        let raw = "2021-04-30T23:30:00.000-03:00";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(parse_calendar_date(raw), Some(expected));
    }

    #[test]
    fn parses_transaction_type_aliases() {
        assert_eq!("UP".parse::<TransactionType>(), Ok(TransactionType::Inflow));
        assert_eq!(
            "expense".parse::<TransactionType>(),
            Ok(TransactionType::Outflow)
        );
        assert!("sideways".parse::<TransactionType>().is_err());
    }
}

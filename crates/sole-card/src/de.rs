//! Lenient deserializers for listing fields.
//!
//! Listing records come from hand-edited catalogs. A field of the wrong
//! shape degrades to "absent" instead of rejecting the whole catalog.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserializer;

use crate::release::{from_epoch_millis, parse_release_date};

/// Deserialize an optional amount, kept exactly as supplied. Only numbers
/// count; strings, booleans and nulls become `None`.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

/// Deserialize an optional release date from epoch milliseconds or a date
/// string. Anything unparseable becomes `None`.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DateVisitor)
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a numeric amount")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(v.is_finite().then_some(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(AmountVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
    type Value = Option<DateTime<Utc>>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("epoch milliseconds or a date string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(from_epoch_millis(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).ok().and_then(from_epoch_millis))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.is_finite() {
            Ok(from_epoch_millis(v as i64))
        } else {
            Ok(None)
        }
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(parse_release_date(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(DateVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    // TOML datetimes surface as a single-entry map holding the date string.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut parsed = None;
        while let Some((_, value)) = map.next_entry::<IgnoredAny, serde_json::Value>()? {
            if parsed.is_none() {
                parsed = value.as_str().and_then(parse_release_date);
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_amount")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "lenient_date")]
        date: Option<DateTime<Utc>>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_amount_accepts_numbers_only() {
        assert_eq!(row(r#"{"amount": 12000}"#).amount, Some(12000.0));
        assert_eq!(row(r#"{"amount": "12000"}"#).amount, None);
        assert_eq!(row(r#"{"amount": null}"#).amount, None);
        assert_eq!(row(r#"{"amount": false}"#).amount, None);
        assert_eq!(row(r#"{"amount": [1, 2]}"#).amount, None);
        assert_eq!(row(r#"{}"#).amount, None);
    }

    #[test]
    fn test_fractional_amount_is_not_rounded() {
        assert_eq!(row(r#"{"amount": 99.5}"#).amount, Some(99.5));
        assert_eq!(row(r#"{"amount": 119.6}"#).amount, Some(119.6));

        let parsed: Row = toml::from_str("amount = 129.99").unwrap();
        assert_eq!(parsed.amount, Some(129.99));
    }

    #[test]
    fn test_date_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(row(r#"{"date": "2024-01-15"}"#).date, Some(expected));
        assert_eq!(
            row(&format!(r#"{{"date": {}}}"#, expected.timestamp_millis())).date,
            Some(expected)
        );
        assert_eq!(row(r#"{"date": "soon"}"#).date, None);
        assert_eq!(row(r#"{"date": null}"#).date, None);
    }

    #[test]
    fn test_date_from_toml_datetime() {
        let parsed: Row = toml::from_str("date = 2024-01-15T00:00:00Z").unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parsed.date, Some(expected));
    }
}

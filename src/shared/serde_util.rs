//! Custom serde helpers for backend wire formats.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::DecodeError;

/// Exchange local time, UTC+05:30.
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Format of `orderDateTime` and similar fields: `"21-Nov-2022 10:00:00"`.
pub const EXCHANGE_DATETIME_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse an exchange local date-time string as IST.
pub fn parse_exchange_datetime(value: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), EXCHANGE_DATETIME_FORMAT).map_err(|e| {
        DecodeError::Timestamp {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;
    ist()
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| DecodeError::Timestamp {
            value: value.to_string(),
            reason: "ambiguous local time".to_string(),
        })
}

/// Blank strings mean "not set" on several endpoints.
pub fn parse_optional_exchange_datetime(
    value: &str,
) -> Result<Option<DateTime<FixedOffset>>, DecodeError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_exchange_datetime(value).map(Some)
}

/// Epoch seconds → UTC.
pub fn from_epoch_secs(secs: i64) -> Result<DateTime<Utc>, DecodeError> {
    DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| DecodeError::Timestamp {
        value: secs.to_string(),
        reason: "out of range".to_string(),
    })
}

/// Deserializes a number or a numeric string into `i64`.
///
/// Several endpoints send quantities as `10` on one call and `"10"` on another.
pub mod lenient_i64 {
    use serde::de::{self, Visitor};
    use serde::Deserializer;
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LenientVisitor;

        impl<'de> Visitor<'de> for LenientVisitor {
            type Value = i64;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
                i64::try_from(v).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
                if v.fract() == 0.0 {
                    Ok(v as i64)
                } else {
                    Err(E::custom(format!("not an integer: {}", v)))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
                let v = v.trim();
                if v.is_empty() {
                    return Ok(0);
                }
                v.parse().map_err(E::custom)
            }

            fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
                Ok(0)
            }
        }

        deserializer.deserialize_any(LenientVisitor)
    }
}

/// Serializes a `bool` as `"True"` / `"False"`.
pub mod true_false {
    use serde::Serializer;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(super::super::true_false(*value))
    }
}

/// Serializes a `bool` as `"1"` / `"0"`.
pub mod one_zero {
    use serde::Serializer;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(super::super::one_zero(*value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde::{Deserialize, Serialize};

    #[test]
    fn test_exchange_datetime_is_ist() {
        let dt = parse_exchange_datetime("21-Nov-2022 10:00:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), IST_OFFSET_SECS);
        assert_eq!((dt.day(), dt.month(), dt.year()), (21, 11, 2022));
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.with_timezone(&Utc).hour(), 4);
    }

    #[test]
    fn test_bad_exchange_datetime() {
        let err = parse_exchange_datetime("2022-11-21").unwrap_err();
        assert!(matches!(err, DecodeError::Timestamp { .. }));
        assert_eq!(parse_optional_exchange_datetime("  ").unwrap(), None);
    }

    #[test]
    fn test_epoch_secs() {
        let dt = from_epoch_secs(1_668_999_600).unwrap();
        assert_eq!(dt.timestamp(), 1_668_999_600);
    }

    #[derive(Deserialize)]
    struct Qty {
        #[serde(with = "lenient_i64")]
        qty: i64,
    }

    #[test]
    fn test_lenient_i64() {
        let a: Qty = serde_json::from_str(r#"{"qty":10}"#).unwrap();
        let b: Qty = serde_json::from_str(r#"{"qty":"10"}"#).unwrap();
        let c: Qty = serde_json::from_str(r#"{"qty":10.0}"#).unwrap();
        assert_eq!((a.qty, b.qty, c.qty), (10, 10, 10));
        assert!(serde_json::from_str::<Qty>(r#"{"qty":"ten"}"#).is_err());
    }

    #[derive(Serialize)]
    struct Flags {
        #[serde(serialize_with = "true_false::serialize")]
        offline: bool,
        #[serde(serialize_with = "one_zero::serialize")]
        cont: bool,
    }

    #[test]
    fn test_sentinel_serializers() {
        let json = serde_json::to_value(Flags {
            offline: false,
            cont: true,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"offline": "False", "cont": "1"}));
    }
}

//! Custom serde helpers for the Nomics API's serialization quirks.
//!
//! Nomics returns most numeric fields as JSON strings, timestamps as RFC 3339
//! strings, and takes list query parameters as comma-separated values. These
//! modules provide reusable serde helpers for those formats.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Serialize/deserialize a `Vec<T>` as a comma-separated string.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use nomics_api_client::types::serde_helpers::comma_separated;
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Request {
///     #[serde(with = "comma_separated")]
///     ids: Vec<String>,
/// }
///
/// let request = Request {
///     ids: vec!["BTC".to_string(), "ETH".to_string()],
/// };
///
/// let json = serde_json::to_string(&request).unwrap();
/// assert_eq!(json, r#"{"ids":"BTC,ETH"}"#);
/// ```
pub mod comma_separated {
    use super::*;

    /// Serialize a list as a comma-separated string.
    pub fn serialize<T, S>(list: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        let s = list
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&s)
    }

    /// Deserialize a comma-separated string into a list.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Vec::new());
        }
        s.split(',')
            .map(|part| part.trim().parse().map_err(de::Error::custom))
            .collect()
    }
}

/// Serialize/deserialize a type using its Display/FromStr implementations.
///
/// Nomics encodes many numbers and booleans as strings (e.g. `"rank":"1"`,
/// `"order_books":"true"`).
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use nomics_api_client::types::serde_helpers::display_fromstr;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(with = "display_fromstr")]
///     rank: u32,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"rank":"17"}"#).unwrap();
/// assert_eq!(response.rank, 17);
/// ```
pub mod display_fromstr {
    use super::*;

    /// Serialize using the Display trait.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize using the FromStr trait.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Like [`display_fromstr`] but for optional fields.
///
/// Missing fields, `null` and `""` all become `None`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use nomics_api_client::types::serde_helpers::optional_display_fromstr;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
///     rank: Option<u32>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"rank":"3"}"#).unwrap();
/// assert_eq!(response.rank, Some(3));
///
/// let response: Response = serde_json::from_str(r#"{"rank":null}"#).unwrap();
/// assert!(response.rank.is_none());
/// ```
pub mod optional_display_fromstr {
    use super::*;

    /// Serialize the inner value using Display, or nothing at all.
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(value) => display_fromstr::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional string using FromStr.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) if !s.is_empty() => s.parse().map(Some).map_err(de::Error::custom),
            _ => Ok(None),
        }
    }
}

/// Deserialize `null` as the type's default value.
///
/// The candle endpoints return `"price_outlier": null` when the flag is
/// unknown; it decodes as `false`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use nomics_api_client::types::serde_helpers::null_as_default;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "null_as_default::deserialize", default)]
///     price_outlier: bool,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"price_outlier":null}"#).unwrap();
/// assert!(!response.price_outlier);
/// ```
pub mod null_as_default {
    use super::*;

    /// Deserialize a value, substituting the default for `null`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Default + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserialize a JSON array of RFC 3339 strings into `Vec<OffsetDateTime>`.
///
/// Used by the sparkline endpoint, which returns parallel arrays of
/// timestamps and prices.
pub mod rfc3339_vec {
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    use super::*;

    /// Deserialize a list of RFC 3339 timestamps.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        raw.iter()
            .map(|s| OffsetDateTime::parse(s, &Rfc3339).map_err(de::Error::custom))
            .collect()
    }
}

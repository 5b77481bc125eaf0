//! Deserializers for numeric fields submitted by HTML forms.
//!
//! Form inputs arrive as JSON strings (`"42"`), while scripted clients send numbers. Both
//! are accepted; blank strings deserialize to `None` so they are reported as missing.

use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Integer(i64),
    Float(f64),
    Text(String),
}

pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Integer(value)) => Ok(Some(value)),
        Some(NumberOrString::Float(value)) if value.fract() != 0.0 => Err(D::Error::custom(
            format!("expected a whole number, found {}", value),
        )),
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        Some(NumberOrString::Float(value)) if value >= i64::MIN as f64 && value < i64::MAX as f64 => {
            Ok(Some(value as i64))
        }
        Some(NumberOrString::Float(value)) => Err(D::Error::custom(format!(
            "number out of range: {}",
            value
        ))),
        Some(NumberOrString::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected a whole number, found '{}'", text)))
        }
    }
}

pub fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Integer(value)) => Ok(Some(value as f64)),
        Some(NumberOrString::Float(value)) => finite(value).map(Some),
        Some(NumberOrString::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            let value = text
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("expected a number, found '{}'", text)))?;
            finite(value).map(Some)
        }
    }
}

/// Rejects `NaN` and infinities, which `f64::from_str` accepts as text.
fn finite<E: Error>(value: f64) -> Result<f64, E> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(E::custom(format!("expected a finite number, found {}", value)))
    }
}

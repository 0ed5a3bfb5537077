//! Coercion of attribute and element text into scalar field types.
//!
//! Text is trimmed before conversion, and empty text becomes the zero value of
//! the field. Anything else must convert exactly.
//!
//! Kismet repeats some single-valued elements, writing one per frequency,
//! advertised SSID type or capture card. For those fields the last element
//! wins.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, de::Error};

/// Deserialize a number of any primitive type from its decimal text.
pub(crate) fn number<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = String::deserialize(d)?;
    parse_number(&text).map_err(D::Error::custom)
}

/// Deserialize a boolean from one of its canonical text forms.
pub(crate) fn flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(d)?;
    parse_flag(&text).map_err(D::Error::custom)
}

/// Deserialize every occurrence of an element, keeping the last.
pub(crate) fn last<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Vec::<T>::deserialize(d)?.pop().unwrap_or_default())
}

fn parse_number<T>(text: &str) -> Result<T, String>
where
    T: FromStr + Default,
    T::Err: Display,
{
    let text = text.trim();

    if text.is_empty() {
        return Ok(T::default());
    }

    text.parse().map_err(|err| format!("invalid number `{text}`: {err}"))
}

fn parse_flag(text: &str) -> Result<bool, String> {
    match text.trim() {
        "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        other => Err(format!("invalid boolean `{other}`")),
    }
}

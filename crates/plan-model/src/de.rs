//! Lenient field decoders
//!
//! Storage rows routinely omit optional columns or send `null`. These
//! helpers fold those cases into empty values so a single sparse row does
//! not reject a whole fetch.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Raw identifier as sent by storage
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum IdValue {
    Text(String),
    Int(i64),
}

impl IdValue {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Int(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrderValue {
    Int(i64),
    Float(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListValue {
    Many(Vec<Option<String>>),
    One(String),
}

/// `null` or absent becomes `T::default()`
///
/// # Errors
/// Propagates decode errors of `T` itself
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Free text column; scalars are rendered, `null` becomes empty
///
/// # Errors
/// Fails on arrays and objects
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextValue>::deserialize(deserializer)? {
        None => String::new(),
        Some(TextValue::Text(text)) => text,
        Some(TextValue::Int(n)) => n.to_string(),
        Some(TextValue::Float(f)) => f.to_string(),
        Some(TextValue::Bool(b)) => b.to_string(),
    })
}

/// Ordering column; accepts integers, whole floats and numeric strings
///
/// `null` and blank strings become 0. Orders compare as integers, so a
/// fractional value is rejected rather than rounded into a tie.
///
/// # Errors
/// Fails on fractional values and on strings that are not numbers
pub fn order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<OrderValue>::deserialize(deserializer)? {
        None => Ok(0),
        Some(OrderValue::Int(n)) => Ok(n),
        Some(OrderValue::Float(f)) => whole_number(f)
            .ok_or_else(|| D::Error::custom(format!("order must be a whole number, got {f}"))),
        Some(OrderValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(0);
            }
            if let Ok(n) = text.parse::<i64>() {
                return Ok(n);
            }
            match text.parse::<f64>() {
                Ok(f) => whole_number(f).ok_or_else(|| {
                    D::Error::custom(format!("order must be a whole number, got {text:?}"))
                }),
                Err(_) => Err(D::Error::custom(format!("invalid order value: {text:?}"))),
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_number(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then(|| f as i64)
}

/// Optional reference to another record; blank strings count as absent
///
/// # Errors
/// Fails on values that are neither strings nor integers
pub fn optional_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(Option::<IdValue>::deserialize(deserializer)?
        .map(IdValue::into_string)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .map(T::from))
}

/// Optional label parsed through `FromStr`; blank strings count as absent
///
/// # Errors
/// Fails when the label is not recognised
pub fn optional_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(label) if !label.trim().is_empty() => {
            label.parse().map(Some).map_err(D::Error::custom)
        }
        _ => Ok(None),
    }
}

/// List of names; a single comma separated string is split
///
/// # Errors
/// Fails on values that are neither strings nor string arrays
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<String> = match Option::<ListValue>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(ListValue::Many(items)) => items.into_iter().flatten().collect(),
        Some(ListValue::One(joined)) => joined.split(',').map(str::to_string).collect(),
    };
    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "order")]
        order: i64,
        #[serde(default, deserialize_with = "text")]
        label: String,
        #[serde(default, deserialize_with = "string_list")]
        names: Vec<String>,
    }

    fn row(value: serde_json::Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn order_variants() {
        assert_eq!(row(json!({"order": 3})).order, 3);
        assert_eq!(row(json!({"order": 2.0})).order, 2);
        assert_eq!(row(json!({"order": "4.0"})).order, 4);
        assert_eq!(row(json!({"order": " 7 "})).order, 7);
        assert_eq!(row(json!({"order": null})).order, 0);
        assert_eq!(row(json!({})).order, 0);
        assert!(serde_json::from_value::<Row>(json!({"order": "soon"})).is_err());
    }

    #[test]
    fn fractional_order_is_rejected() {
        for value in [json!(1.7), json!(1.2), json!("1.5")] {
            let err = serde_json::from_value::<Row>(json!({ "order": value })).unwrap_err();
            assert!(err.to_string().contains("whole number"), "{err}");
        }
    }

    #[test]
    fn text_variants() {
        assert_eq!(row(json!({"label": 6})).label, "6");
        assert_eq!(row(json!({"label": null})).label, "");
        assert_eq!(row(json!({"label": "3 mois"})).label, "3 mois");
    }

    #[test]
    fn list_variants() {
        assert_eq!(
            row(json!({"names": ["Ana", null, " ", "Léo "]})).names,
            vec!["Ana", "Léo"]
        );
        assert_eq!(row(json!({"names": "Ana, Léo"})).names, vec!["Ana", "Léo"]);
        assert!(row(json!({"names": null})).names.is_empty());
    }
}

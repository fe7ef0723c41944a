//! Field decoders for scrape exports, where numbers arrive as numbers,
//! numeric strings, `"N/A"` or `null` depending on the scraper revision.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const UNCATEGORIZED_TAGS: &str = "Uncategorized";

pub(super) fn zero_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value).unwrap_or(0.0))
}

pub(super) fn zero_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .map_or(0, clamp_u32))
}

pub(super) fn optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value).map(clamp_u32))
}

/// Left-to-right positions read leading digits the way the site's
/// `data-lr` attribute was parsed; anything without them is absent.
pub(super) fn optional_position<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(text)) => leading_integer(&text),
        _ => None,
    })
}

pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    })
}

/// Accepts `"Trad, Sport"` or `["Trad", "Sport"]`; anything else is empty.
pub(super) fn label_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        String(String),
        Vec(Vec<Value>),
        Other(Value),
    }

    let parsed = Option::<StringOrVec>::deserialize(deserializer)?;
    let raw: Vec<String> = match parsed {
        Some(StringOrVec::String(text)) => text.split(',').map(str::to_string).collect(),
        Some(StringOrVec::Vec(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        Some(StringOrVec::Other(_)) | None => Vec::new(),
    };
    Ok(raw
        .into_iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty() && label != "N/A")
        .collect())
}

/// Older exports wrote `route_tags: []`; a bare list lands in one category.
pub(super) fn tag_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let mut tags = BTreeMap::new();
    match value {
        Some(Value::Object(map)) => {
            for (category, entries) in map {
                let entries = string_items(entries);
                if !entries.is_empty() {
                    tags.insert(category, entries);
                }
            }
        }
        Some(list @ Value::Array(_)) => {
            let entries = string_items(list);
            if !entries.is_empty() {
                tags.insert(UNCATEGORIZED_TAGS.to_string(), entries);
            }
        }
        _ => {}
    }
    Ok(tags)
}

/// Items that fail to decode are dropped; a non-array value is an empty list.
pub(super) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<T>(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn string_items(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
                _ => None,
            })
            .collect(),
        Value::String(text) if !text.trim().is_empty() => vec![text.trim().to_string()],
        _ => Vec::new(),
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().replace(',', "").parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn clamp_u32(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value.trunc() as u32
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let len = digits.chars().take_while(char::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    digits[..len].parse::<i64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use super::leading_integer;

    #[test]
    fn leading_integer_reads_prefix_digits() {
        assert_eq!(leading_integer("12"), Some(12));
        assert_eq!(leading_integer(" 7th from left"), Some(7));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("left"), None);
        assert_eq!(leading_integer(""), None);
    }
}

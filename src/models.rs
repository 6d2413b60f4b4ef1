use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;

/// HTTP verbs used against the items endpoint
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT)
    }
}

/// A single inventory record.
///
/// `item_id` is assigned by the server; a value of 0 means the item has not
/// been persisted yet. `category_name` only ever arrives on reads. Neither is
/// serialized, so the serialized form is exactly the POST/PUT body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing, deserialize_with = "lenient_i64")]
    pub item_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub category_id: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: i64,
    #[serde(rename = "minQuantity", default, deserialize_with = "lenient_i64")]
    pub min_quantity: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cost: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vendor: String,
    #[serde(default, skip_serializing)]
    pub category_name: Option<String>,
}

impl Item {
    pub fn is_persisted(&self) -> bool {
        self.item_id > 0
    }

    /// Stock is at or below the reorder threshold
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    pub fn reorder_quantity(&self) -> i64 {
        self.min_quantity.saturating_sub(self.quantity).max(0)
    }

    /// One line in the item list, e.g. `ID: 1 | Laptop (Qty: 50)`
    pub fn display_line(&self) -> String {
        format!("ID: {} | {} (Qty: {})", self.item_id, self.name, self.quantity)
    }
}

/// Read the id back out of a line produced by [`Item::display_line`].
///
/// Returns `None` when the `ID: ` marker is missing or is not followed by a
/// positive integer.
pub fn parse_item_id(line: &str) -> Option<i64> {
    static MARKER: OnceLock<Option<Regex>> = OnceLock::new();
    let marker = MARKER
        .get_or_init(|| Regex::new(r"ID: (\d+)").ok())
        .as_ref()?;

    marker
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

// The PHP backend hands columns back as strings ("50", "5.00") and NULL for
// empty ones, so numeric fields take either form.

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrString::Int(n)) => Ok(n),
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        Some(NumberOrString::Float(f))
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
        {
            Ok(f as i64)
        }
        Some(NumberOrString::Float(f)) => {
            Err(D::Error::custom(format!("expected an integer, got {}", f)))
        }
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrString::Int(n)) => Ok(n as f64),
        Some(NumberOrString::Float(f)) => Ok(f),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, got {:?}", s))),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

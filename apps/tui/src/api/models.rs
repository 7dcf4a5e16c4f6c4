use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Represents a well record as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PozoDetail {
    #[serde(default, deserialize_with = "lenient_string")]
    pub well_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub watershed: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub province: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub area: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub field: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub formation: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub classification: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub resource_type: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub well_type: String,
    #[serde(default, deserialize_with = "optional_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub depth: Option<f64>,
    #[serde(default, deserialize_with = "lenient_geojson")]
    pub geojson: Option<String>,
}

impl PozoDetail {
    /// Longitude and latitude of the well's GeoJSON point, if it has a
    /// usable one.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        #[derive(Deserialize)]
        struct GeoPoint {
            coordinates: Vec<f64>,
        }

        let raw = self.geojson.as_deref()?;
        let point: GeoPoint = serde_json::from_str(raw).ok()?;
        match point.coordinates.as_slice() {
            [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some((*lon, *lat)),
            _ => None,
        }
    }

    pub fn depth_label(&self) -> String {
        self.depth.map_or_else(String::new, format_depth)
    }

    /// Depth with its unit for detail panels; blank when unknown.
    pub fn depth_in_meters(&self) -> String {
        self.depth
            .map_or_else(String::new, |depth| format!("{} metros", format_depth(depth)))
    }
}

fn format_depth(depth: f64) -> String {
    if depth.fract() == 0.0 {
        format!("{depth:.0}")
    } else {
        format!("{depth}")
    }
}

/// One month of production for a single well
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProductionMonthly {
    #[serde(
        default,
        alias = "fecha",
        alias = "periodo",
        deserialize_with = "lenient_string"
    )]
    pub date: String,
    #[serde(default, alias = "petroleo", deserialize_with = "lenient_number")]
    pub oil: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub gas: Option<f64>,
    #[serde(default, alias = "agua", deserialize_with = "lenient_number")]
    pub water: Option<f64>,
}

/// Operating company with its well count
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    #[serde(default, deserialize_with = "optional_string")]
    pub empresa: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub cantidad_pozos: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ProductionStat {
    #[serde(default, deserialize_with = "lenient_total")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient_total")]
    pub avg: f64,
}

/// Company-level production totals and averages
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ProductionAggregates {
    #[serde(default)]
    pub oil: ProductionStat,
    #[serde(default)]
    pub water: ProductionStat,
    #[serde(default)]
    pub gas: ProductionStat,
}

/// Finite JSON numbers, and strings that parse as finite numbers.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|n| n.is_finite()),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite()),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(to_number))
}

fn lenient_total<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or(0.0))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?
        .filter(|n| *n >= 0.0)
        .map_or(0, |n| n as u64))
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_of).unwrap_or_default())
}

fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_of))
}

/// The backend sometimes embeds the point as an object instead of a string.
fn lenient_geojson<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if text.trim().is_empty() => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

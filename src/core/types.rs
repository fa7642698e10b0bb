use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Node type tag Figma uses for top-level pages.
pub const CANVAS_NODE_TYPE: &str = "CANVAS";

/// Largest magnitude written as a JSON integer; beyond it f64 loses integer precision.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Missing and `null` both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Whole coordinates are written as `10`, not `10.0`.
fn serialize_coordinate<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let whole = value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER;
    if whole && !(*value == 0.0 && value.is_sign_negative()) {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BoundingBox {
    #[serde(default, deserialize_with = "null_as_default", serialize_with = "serialize_coordinate")]
    pub x: f64,
    #[serde(default, deserialize_with = "null_as_default", serialize_with = "serialize_coordinate")]
    pub y: f64,
    #[serde(default, deserialize_with = "null_as_default", serialize_with = "serialize_coordinate")]
    pub width: f64,
    #[serde(default, deserialize_with = "null_as_default", serialize_with = "serialize_coordinate")]
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Constraints {
    #[serde(default, deserialize_with = "null_as_default")]
    pub vertical: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub horizontal: String,
}

pub type StyleMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<FigmaNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FigmaDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub node_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<FigmaNode>,
}

/// Response body of `GET /v1/files/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FigmaFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub document: FigmaDocument,
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: BTreeMap<String, Value>,
}

/// One flattened, parent-linked entry written to the output file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayerRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_id: String,
    #[serde(
        rename = "absoluteBoundingBox",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "styles_absent")]
    pub styles: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
}

fn styles_absent(styles: &Option<StyleMap>) -> bool {
    styles.as_ref().map_or(true, BTreeMap::is_empty)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub file_name: String,
    pub page_id: String,
    pub layer_count: usize,
    pub output_path: String,
}

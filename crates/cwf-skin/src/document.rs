//! The JSON skin document.
//!
//! A document holds metadata, session-wide palette colors, and one style
//! record per element tag at the top level:
//!
//! ```json
//! {
//!     "metadata": { "name": "Default Watchface", "version": "v0.1" },
//!     "highColor": "#FFFF00",
//!     "enableSecond": true,
//!     "sgv": { "topmargin": 140, "visibility": "visible", "fontColor": "bgColor" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cwf_types::error::Result;

/// Descriptive fields stamped on a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Style of one element, in reference-resolution units. Absent fields take
/// the applier's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topmargin: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leftmargin: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textsize: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(
        default,
        rename = "fontStyle",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_style: Option<String>,
    #[serde(
        default,
        rename = "fontColor",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_color: Option<String>,
    /// Tint for image elements. May be the `bgColor` sentinel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A parsed skin document. Held immutably for the life of a skin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDocument")]
pub struct SkinDocument {
    pub metadata: SkinMetadata,
    pub high_color: Option<String>,
    pub mid_color: Option<String>,
    pub low_color: Option<String>,
    pub low_bat_color: Option<String>,
    pub carb_color: Option<String>,
    pub grid_color: Option<String>,
    pub point_size: Option<i32>,
    pub enable_second: Option<bool>,
    /// Style records keyed by element tag.
    pub elements: BTreeMap<String, StyleRecord>,
}

impl SkinDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize with 4-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    pub fn style(&self, tag: &str) -> Option<&StyleRecord> {
        self.elements.get(tag)
    }
}

/// Wire form. Unknown top-level keys are element records; records that do
/// not parse are dropped so one bad entry cannot reject a whole skin.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default)]
    metadata: SkinMetadata,
    #[serde(default)]
    high_color: Option<String>,
    #[serde(default)]
    mid_color: Option<String>,
    #[serde(default)]
    low_color: Option<String>,
    #[serde(default)]
    low_bat_color: Option<String>,
    #[serde(default)]
    carb_color: Option<String>,
    #[serde(default)]
    grid_color: Option<String>,
    #[serde(default)]
    point_size: Option<i32>,
    #[serde(default)]
    enable_second: Option<bool>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl From<RawDocument> for SkinDocument {
    fn from(raw: RawDocument) -> Self {
        let mut elements = BTreeMap::new();
        for (tag, value) in raw.rest {
            if !value.is_object() {
                log::debug!("ignoring non-object top-level key '{tag}'");
                continue;
            }
            match serde_json::from_value::<StyleRecord>(value) {
                Ok(record) => {
                    elements.insert(tag, record);
                }
                Err(e) => log::warn!("dropping malformed style record '{tag}': {e}"),
            }
        }
        Self {
            metadata: raw.metadata,
            high_color: raw.high_color,
            mid_color: raw.mid_color,
            low_color: raw.low_color,
            low_bat_color: raw.low_bat_color,
            carb_color: raw.carb_color,
            grid_color: raw.grid_color,
            point_size: raw.point_size,
            enable_second: raw.enable_second,
            elements,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentOut<'a> {
    metadata: &'a SkinMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    high_color: &'a Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mid_color: &'a Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    low_color: &'a Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    low_bat_color: &'a Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    carb_color: &'a Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid_color: &'a Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    point_size: &'a Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_second: &'a Option<bool>,
    #[serde(flatten)]
    elements: &'a BTreeMap<String, StyleRecord>,
}

impl Serialize for SkinDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DocumentOut {
            metadata: &self.metadata,
            high_color: &self.high_color,
            mid_color: &self.mid_color,
            low_color: &self.low_color,
            low_bat_color: &self.low_bat_color,
            carb_color: &self.carb_color,
            grid_color: &self.grid_color,
            point_size: &self.point_size,
            enable_second: &self.enable_second,
            elements: &self.elements,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKIN: &str = r##"{
        "metadata": { "name": "Night", "author": "me", "createdAt": "2026-01-01", "version": "v0.1" },
        "highColor": "#FFA500",
        "pointSize": 3,
        "enableSecond": false,
        "sgv": { "width": 200, "topmargin": 140, "visibility": "visible", "fontColor": "bgColor" },
        "hour_hand": { "color": "#FFFFFF" }
    }"##;

    #[test]
    fn parses_top_level_fields() {
        let doc = SkinDocument::from_json(SKIN).unwrap();
        assert_eq!(doc.metadata.name.as_deref(), Some("Night"));
        assert_eq!(doc.metadata.created_at.as_deref(), Some("2026-01-01"));
        assert_eq!(doc.high_color.as_deref(), Some("#FFA500"));
        assert_eq!(doc.mid_color, None);
        assert_eq!(doc.point_size, Some(3));
        assert_eq!(doc.enable_second, Some(false));
    }

    #[test]
    fn element_records_are_collected() {
        let doc = SkinDocument::from_json(SKIN).unwrap();
        assert_eq!(doc.elements.len(), 2);
        let sgv = doc.style("sgv").unwrap();
        assert_eq!(sgv.width, Some(200));
        assert_eq!(sgv.height, None);
        assert_eq!(sgv.font_color.as_deref(), Some("bgColor"));
        assert_eq!(doc.style("hour_hand").unwrap().color.as_deref(), Some("#FFFFFF"));
        assert!(doc.style("loop").is_none());
    }

    #[test]
    fn malformed_record_is_dropped() {
        let doc = SkinDocument::from_json(
            r#"{ "sgv": { "width": "wide" }, "delta": { "visibility": "visible" }, "note": 3 }"#,
        )
        .unwrap();
        assert!(doc.style("sgv").is_none());
        assert!(doc.style("delta").is_some());
        assert!(doc.style("note").is_none());
    }

    #[test]
    fn empty_object_is_valid() {
        let doc = SkinDocument::from_json("{}").unwrap();
        assert_eq!(doc, SkinDocument::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(SkinDocument::from_json("{ not json").is_err());
    }

    #[test]
    fn pretty_output_uses_four_space_indent() {
        let doc = SkinDocument::from_json(SKIN).unwrap();
        let text = doc.to_json_pretty().unwrap();
        assert!(text.contains("\n    \"metadata\": {\n        \"name\": \"Night\""));
        assert!(text.contains("\"fontColor\": \"bgColor\""));
        assert!(!text.contains("midColor"));
    }

    #[test]
    fn reparse_preserves_document() {
        let doc = SkinDocument::from_json(SKIN).unwrap();
        let again = SkinDocument::from_json(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(again, doc);
    }
}

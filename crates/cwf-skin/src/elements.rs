//! The fixed table of named display elements a skin can style.

use serde::Serialize;

use crate::assets::DrawableKey;

/// What kind of display element a tag names. Decides which style fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Text,
    Image,
    Chart,
}

/// Every element the face knows, in paint order (back to front).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ElementTag {
    Background,
    Chart,
    CoverChart,
    FreeText1,
    FreeText2,
    FreeText3,
    FreeText4,
    Iob1,
    Iob2,
    Cob1,
    Cob2,
    Delta,
    AvgDelta,
    UploaderBattery,
    RigBattery,
    BasalRate,
    Bgi,
    Time,
    Hour,
    Minute,
    Second,
    TimePeriod,
    DayName,
    Day,
    Month,
    Loop,
    Direction,
    Timestamp,
    Sgv,
    CoverPlate,
    HourHand,
    MinuteHand,
    SecondHand,
}

const ELEMENTS: &[(ElementTag, &str, ElementKind)] = &[
    (ElementTag::Background, "background", ElementKind::Image),
    (ElementTag::Chart, "chart", ElementKind::Chart),
    (ElementTag::CoverChart, "cover_chart", ElementKind::Image),
    (ElementTag::FreeText1, "freetext1", ElementKind::Text),
    (ElementTag::FreeText2, "freetext2", ElementKind::Text),
    (ElementTag::FreeText3, "freetext3", ElementKind::Text),
    (ElementTag::FreeText4, "freetext4", ElementKind::Text),
    (ElementTag::Iob1, "iob1", ElementKind::Text),
    (ElementTag::Iob2, "iob2", ElementKind::Text),
    (ElementTag::Cob1, "cob1", ElementKind::Text),
    (ElementTag::Cob2, "cob2", ElementKind::Text),
    (ElementTag::Delta, "delta", ElementKind::Text),
    (ElementTag::AvgDelta, "avg_delta", ElementKind::Text),
    (ElementTag::UploaderBattery, "uploader_battery", ElementKind::Text),
    (ElementTag::RigBattery, "rig_battery", ElementKind::Text),
    (ElementTag::BasalRate, "basalRate", ElementKind::Text),
    (ElementTag::Bgi, "bgi", ElementKind::Text),
    (ElementTag::Time, "time", ElementKind::Text),
    (ElementTag::Hour, "hour", ElementKind::Text),
    (ElementTag::Minute, "minute", ElementKind::Text),
    (ElementTag::Second, "second", ElementKind::Text),
    (ElementTag::TimePeriod, "timePeriod", ElementKind::Text),
    (ElementTag::DayName, "day_name", ElementKind::Text),
    (ElementTag::Day, "day", ElementKind::Text),
    (ElementTag::Month, "month", ElementKind::Text),
    (ElementTag::Loop, "loop", ElementKind::Text),
    (ElementTag::Direction, "direction", ElementKind::Text),
    (ElementTag::Timestamp, "timestamp", ElementKind::Text),
    (ElementTag::Sgv, "sgv", ElementKind::Text),
    (ElementTag::CoverPlate, "cover_plate", ElementKind::Image),
    (ElementTag::HourHand, "hour_hand", ElementKind::Image),
    (ElementTag::MinuteHand, "minute_hand", ElementKind::Image),
    (ElementTag::SecondHand, "second_hand", ElementKind::Image),
];

impl ElementTag {
    /// All tags in paint order.
    pub fn all() -> impl Iterator<Item = ElementTag> {
        ELEMENTS.iter().map(|(tag, _, _)| *tag)
    }

    /// The string used for this element in skin documents.
    pub fn key(self) -> &'static str {
        ELEMENTS[self as usize].1
    }

    pub fn kind(self) -> ElementKind {
        ELEMENTS[self as usize].2
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ELEMENTS
            .iter()
            .find(|(_, k, _)| *k == key)
            .map(|(tag, _, _)| *tag)
    }

    /// Bundle key for image elements.
    pub fn drawable_key(self) -> Option<DrawableKey> {
        match self.kind() {
            ElementKind::Image => DrawableKey::from_key(self.key()),
            _ => None,
        }
    }

    /// Elements whose visibility also depends on the seconds setting.
    pub fn is_seconds_element(self) -> bool {
        matches!(self, Self::Second | Self::SecondHand)
    }
}

impl From<ElementTag> for &'static str {
    fn from(tag: ElementTag) -> Self {
        tag.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_declaration_order() {
        for (i, (tag, _, _)) in ELEMENTS.iter().enumerate() {
            assert_eq!(*tag as usize, i, "{tag:?} out of order");
        }
    }

    #[test]
    fn keys_are_unique_and_roundtrip() {
        let mut seen = std::collections::HashSet::new();
        for tag in ElementTag::all() {
            assert!(seen.insert(tag.key()), "duplicate key {}", tag.key());
            assert_eq!(ElementTag::from_key(tag.key()), Some(tag));
        }
        assert_eq!(ElementTag::from_key("unknown_widget"), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(ElementTag::Sgv.kind(), ElementKind::Text);
        assert_eq!(ElementTag::Loop.kind(), ElementKind::Text);
        assert_eq!(ElementTag::HourHand.kind(), ElementKind::Image);
        assert_eq!(ElementTag::Chart.kind(), ElementKind::Chart);
    }

    #[test]
    fn every_image_element_has_a_drawable_key() {
        for tag in ElementTag::all() {
            assert_eq!(
                tag.drawable_key().is_some(),
                tag.kind() == ElementKind::Image,
                "{tag:?}"
            );
        }
    }

    #[test]
    fn seconds_elements() {
        assert!(ElementTag::Second.is_seconds_element());
        assert!(ElementTag::SecondHand.is_seconds_element());
        assert!(!ElementTag::Minute.is_seconds_element());
    }

    #[test]
    fn serializes_as_key() {
        assert_eq!(
            serde_json::to_string(&ElementTag::AvgDelta).unwrap(),
            "\"avg_delta\""
        );
    }
}

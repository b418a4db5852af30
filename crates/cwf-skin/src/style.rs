//! Resolved, device-ready element styles.
//!
//! An `ElementStyleSet` is both the applier's output and the description of
//! the host's live layout that the capturer reads back.

use std::collections::BTreeMap;

use serde::Serialize;

use cwf_types::Color;

use crate::assets::{ImageStyle, PlatformIcon};
use crate::codec::{FontFamily, FontStyle, Gravity, Visibility};
use crate::elements::{ElementKind, ElementTag};
use crate::geometry::Dimension;
use crate::palette::{BASAL_BACKGROUND_COLOR, BASAL_CENTER_COLOR, FACE_BACKGROUND, SessionColors};

/// Text parameters of a text element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    /// Text size in device pixels.
    pub size_px: i32,
    pub gravity: Gravity,
    pub font: FontFamily,
    pub font_style: FontStyle,
    pub color: Color,
    /// Icon painted behind the text (the loop status indicator).
    pub background: Option<PlatformIcon>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: 22,
            gravity: Gravity::Center,
            font: FontFamily::SansSerif,
            font_style: FontStyle::Normal,
            color: Color::WHITE,
            background: None,
        }
    }
}

/// Fully concrete style of one element, in device pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementStyle {
    pub tag: ElementTag,
    pub width: Dimension,
    pub height: Dimension,
    pub top_margin: i32,
    pub left_margin: i32,
    pub visibility: Visibility,
    /// Clockwise rotation in degrees.
    pub rotation: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageStyle>,
}

impl ElementStyle {
    /// A hidden, natural-size element with the defaults for its kind.
    pub fn new(tag: ElementTag) -> Self {
        let kind = tag.kind();
        Self {
            tag,
            width: Dimension::WrapContent,
            height: Dimension::WrapContent,
            top_margin: 0,
            left_margin: 0,
            visibility: Visibility::Hidden,
            rotation: 0.0,
            text: (kind == ElementKind::Text).then(TextStyle::default),
            image: (kind == ElementKind::Image).then(ImageStyle::default),
        }
    }
}

/// Parameters for the glucose chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartStyle {
    pub point_size: i32,
    pub high_color: Color,
    pub mid_color: Color,
    pub low_color: Color,
    pub carb_color: Color,
    pub grid_color: Color,
    pub basal_background: Color,
    pub basal_center: Color,
}

impl ChartStyle {
    pub fn from_colors(colors: &SessionColors, point_size: i32) -> Self {
        Self {
            point_size,
            high_color: colors.high,
            mid_color: colors.mid,
            low_color: colors.low,
            carb_color: colors.carb,
            grid_color: colors.grid,
            basal_background: BASAL_BACKGROUND_COLOR,
            basal_center: BASAL_CENTER_COLOR,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from_colors(&SessionColors::default(), 2)
    }
}

/// Styles for the known elements present on the host, plus face-wide
/// parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementStyleSet {
    pub background: Color,
    pub chart: ChartStyle,
    elements: BTreeMap<ElementTag, ElementStyle>,
}

impl Default for ElementStyleSet {
    fn default() -> Self {
        Self {
            background: FACE_BACKGROUND,
            chart: ChartStyle::default(),
            elements: BTreeMap::new(),
        }
    }
}

impl ElementStyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the style for `style.tag`.
    pub fn insert(&mut self, style: ElementStyle) {
        self.elements.insert(style.tag, style);
    }

    pub fn get(&self, tag: ElementTag) -> Option<&ElementStyle> {
        self.elements.get(&tag)
    }

    pub fn get_mut(&mut self, tag: ElementTag) -> Option<&mut ElementStyle> {
        self.elements.get_mut(&tag)
    }

    pub fn contains(&self, tag: ElementTag) -> bool {
        self.elements.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Styles in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementStyle> {
        self.elements.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ElementStyle> {
        self.elements.values_mut()
    }
}

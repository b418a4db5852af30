//! The built-in face layout.
//!
//! The host's element arrangement before any skin is applied, defined as an
//! embedded TOML table in reference units. Capturing this layout produces the
//! stock "Default Watchface" skin.

use std::collections::BTreeMap;

use serde::Deserialize;

use cwf_types::color::parse_color;
use cwf_types::error::Result;

use crate::applier::DEFAULT_TEXT_SIZE;
use crate::assets::ImageSource;
use crate::codec::{FontStyle, Gravity, Visibility};
use crate::elements::ElementTag;
use crate::geometry::{DeviceContext, Dimension};
use crate::style::{ElementStyle, ElementStyleSet};

const DEFAULT_LAYOUT: &str = r##"
[background]
w = 400
h = 400

[chart]
w = 400
h = 147
top = 254

[cover_chart]
w = 400
h = 147
top = 254
visible = false

[freetext1]
visible = false
[freetext2]
visible = false
[freetext3]
visible = false
[freetext4]
visible = false

[iob1]
w = 125
h = 33
top = 168
left = 235
text_size = 19

[iob2]
visible = false
[cob1]
visible = false

[cob2]
w = 125
h = 33
top = 168
left = 40

[delta]
w = 125
h = 33
top = 102
left = 230
text_size = 25
gravity = "left"

[avg_delta]
w = 125
h = 33
top = 130
left = 230
text_size = 20
gravity = "left"

[uploader_battery]
w = 80
h = 33
top = 220
left = 160
text_size = 17

[rig_battery]
visible = false

[basalRate]
w = 125
h = 33
top = 200
left = 40
text_size = 17

[bgi]
visible = false

[time]
w = 180
h = 70
top = 12
left = 110
text_size = 50
bold = true

[hour]
visible = false
[minute]
visible = false

[second]
w = 40
h = 30
top = 40
left = 300
text_size = 20

[timePeriod]
visible = false

[day_name]
w = 60
h = 30
top = 75
left = 80
text_size = 16

[day]
w = 40
h = 30
top = 75
left = 150
text_size = 16

[month]
w = 60
h = 30
top = 75
left = 200
text_size = 16

[loop]
w = 64
h = 33
top = 220
left = 240
text_size = 15

[direction]
w = 60
h = 60
top = 110
left = 340
text_size = 36

[timestamp]
w = 60
h = 33
top = 220
left = 80
text_size = 17

[sgv]
w = 200
h = 80
top = 95
left = 30
text_size = 60
bold = true

[cover_plate]
w = 400
h = 400

[hour_hand]
w = 400
h = 400

[minute_hand]
w = 400
h = 400

[second_hand]
w = 400
h = 400
"##;

/// One element of the built-in layout, in reference units.
#[derive(Debug, Clone, Deserialize)]
struct LayoutEntry {
    w: Option<i32>,
    h: Option<i32>,
    #[serde(default)]
    top: i32,
    #[serde(default)]
    left: i32,
    text_size: Option<i32>,
    #[serde(default = "yes")]
    visible: bool,
    gravity: Option<String>,
    #[serde(default)]
    bold: bool,
    text_color: Option<String>,
}

fn yes() -> bool {
    true
}

/// Build the host's default element set for `device`.
///
/// Every known element is present. Image elements start on their platform
/// icon, if they have one.
pub fn default_layout(device: &DeviceContext) -> Result<ElementStyleSet> {
    layout_from_toml(DEFAULT_LAYOUT, device)
}

fn layout_from_toml(layout_toml: &str, device: &DeviceContext) -> Result<ElementStyleSet> {
    let entries: BTreeMap<String, LayoutEntry> = toml::from_str(layout_toml)?;
    let mut set = ElementStyleSet::new();

    for tag in ElementTag::all() {
        let mut style = ElementStyle::new(tag);
        if let Some(image) = style.image.as_mut() {
            image.source = tag
                .drawable_key()
                .and_then(|key| key.fallback_icon())
                .map(|icon| ImageSource::Platform { icon });
        }
        match entries.get(tag.key()) {
            Some(entry) => apply_entry(&mut style, entry, device)?,
            None => log::debug!("built-in layout has no entry for '{}'", tag.key()),
        }
        set.insert(style);
    }

    for key in entries.keys() {
        if ElementTag::from_key(key).is_none() {
            log::warn!("built-in layout names unknown element '{key}'");
        }
    }
    Ok(set)
}

fn apply_entry(style: &mut ElementStyle, entry: &LayoutEntry, device: &DeviceContext) -> Result<()> {
    style.width = entry
        .w
        .map_or(Dimension::WrapContent, |w| Dimension::Px(device.to_device(w)));
    style.height = entry
        .h
        .map_or(Dimension::WrapContent, |h| Dimension::Px(device.to_device(h)));
    style.top_margin = device.to_device(entry.top);
    style.left_margin = device.to_device(entry.left);
    style.visibility = Visibility::from_flag(entry.visible);

    if let Some(text) = style.text.as_mut() {
        text.size_px = device.to_device(entry.text_size.unwrap_or(DEFAULT_TEXT_SIZE));
        if let Some(ref gravity) = entry.gravity {
            text.gravity = Gravity::from_key(gravity);
        }
        if entry.bold {
            text.font_style = FontStyle::Bold;
        }
        if let Some(ref c) = entry.text_color {
            text.color = parse_color(c)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PlatformIcon;

    fn unit() -> DeviceContext {
        DeviceContext::new(400).unwrap()
    }

    #[test]
    fn default_layout_covers_every_element() {
        let set = default_layout(&unit()).unwrap();
        assert_eq!(set.len(), ElementTag::all().count());
    }

    #[test]
    fn default_layout_positions() {
        let set = default_layout(&unit()).unwrap();
        let sgv = set.get(ElementTag::Sgv).unwrap();
        assert_eq!(sgv.width, Dimension::Px(200));
        assert_eq!(sgv.top_margin, 95);
        assert_eq!(sgv.left_margin, 30);
        assert_eq!(sgv.visibility, Visibility::Visible);
        let text = sgv.text.as_ref().unwrap();
        assert_eq!(text.size_px, 60);
        assert_eq!(text.font_style, FontStyle::Bold);

        assert_eq!(set.get(ElementTag::Bgi).unwrap().visibility, Visibility::Hidden);
        assert_eq!(set.get(ElementTag::CoverChart).unwrap().visibility, Visibility::Hidden);
        assert_eq!(
            set.get(ElementTag::Delta).unwrap().text.as_ref().unwrap().gravity,
            Gravity::Left
        );
    }

    #[test]
    fn default_layout_scales_to_device() {
        let set = default_layout(&DeviceContext::new(800).unwrap()).unwrap();
        let time = set.get(ElementTag::Time).unwrap();
        assert_eq!(time.width, Dimension::Px(360));
        assert_eq!(time.top_margin, 24);
        assert_eq!(time.text.as_ref().unwrap().size_px, 100);
    }

    #[test]
    fn hands_start_on_platform_icons() {
        let set = default_layout(&unit()).unwrap();
        let hand = set.get(ElementTag::MinuteHand).unwrap().image.as_ref().unwrap();
        assert_eq!(
            hand.source,
            Some(ImageSource::Platform {
                icon: PlatformIcon::MINUTE_HAND
            })
        );
        let bg = set.get(ElementTag::Background).unwrap().image.as_ref().unwrap();
        assert!(bg.source.is_none());
    }

    #[test]
    fn missing_entry_leaves_element_hidden() {
        let set = layout_from_toml("[sgv]\nw = 10\n", &unit()).unwrap();
        assert_eq!(set.get(ElementTag::Delta).unwrap().visibility, Visibility::Hidden);
        assert_eq!(set.get(ElementTag::Sgv).unwrap().visibility, Visibility::Visible);
        assert_eq!(set.get(ElementTag::Sgv).unwrap().height, Dimension::WrapContent);
    }

    #[test]
    fn text_color_entry() {
        let set = layout_from_toml("[day]\ntext_color = \"#FF0000\"\n", &unit()).unwrap();
        assert_eq!(
            set.get(ElementTag::Day).unwrap().text.as_ref().unwrap().color,
            cwf_types::Color::RED
        );
        assert!(layout_from_toml("[day]\ntext_color = \"nope\"\n", &unit()).is_err());
    }

    #[test]
    fn malformed_layout_toml() {
        assert!(layout_from_toml("[sgv\nw = 1", &unit()).is_err());
    }
}

//! Skin application: document + bundle + device + per-tick inputs →
//! resolved element styles.

use cwf_platform::{BatteryLevel, DataAge, LoopStatus};

use crate::assets::{AssetBundle, PlatformIcon, resolve_image};
use crate::codec::{FontFamily, FontStyle, Gravity, Visibility};
use crate::document::{SkinDocument, StyleRecord};
use crate::elements::{ElementKind, ElementTag};
use crate::geometry::{DeviceContext, Dimension};
use crate::inputs::ThemeInputs;
use crate::palette::{FACE_BACKGROUND, ResolvedPalette, STALE_TIMESTAMP_COLOR, SessionColors};
use crate::style::{ChartStyle, ElementStyle, ElementStyleSet};

/// Text size used when a text record has none, in reference units.
pub const DEFAULT_TEXT_SIZE: i32 = 22;
/// Chart point size used when the document has none.
pub const DEFAULT_POINT_SIZE: i32 = 2;

/// Applies one activated skin. Holds the document and bundle immutably; every
/// call to [`SkinApplier::apply`] recomputes the styles from scratch.
#[derive(Debug, Clone)]
pub struct SkinApplier {
    document: SkinDocument,
    bundle: AssetBundle,
    device: DeviceContext,
    colors: SessionColors,
}

impl SkinApplier {
    pub fn new(document: SkinDocument, bundle: AssetBundle, device: DeviceContext) -> Self {
        let colors = SessionColors::from_document(&document);
        Self {
            document,
            bundle,
            device,
            colors,
        }
    }

    pub fn document(&self) -> &SkinDocument {
        &self.document
    }

    pub fn bundle(&self) -> &AssetBundle {
        &self.bundle
    }

    pub fn device(&self) -> &DeviceContext {
        &self.device
    }

    /// Palette colors resolved at activation.
    pub fn colors(&self) -> &SessionColors {
        &self.colors
    }

    /// Seconds are shown only if the skin enables them and the user has not
    /// turned them off. A skin that says nothing disables them.
    pub fn seconds_enabled(&self, show_seconds: bool) -> bool {
        self.document.enable_second.unwrap_or(false) && show_seconds
    }

    /// Resolve every element of `base` (the host's element set) for one tick.
    ///
    /// Elements of `base` with no record in the document are hidden and
    /// otherwise left exactly as they were.
    pub fn apply(&self, base: &ElementStyleSet, inputs: &ThemeInputs) -> ElementStyleSet {
        let palette = ResolvedPalette::for_tick(&self.colors, inputs);
        let mut out = base.clone();

        for style in out.iter_mut() {
            match self.document.style(style.tag.key()) {
                Some(record) => {
                    self.apply_record(style, record, &palette);
                    apply_mode_colors(style, &palette, inputs);
                }
                None => style.visibility = Visibility::Hidden,
            }
        }

        let seconds = self.seconds_enabled(inputs.show_seconds);
        for tag in [ElementTag::Second, ElementTag::SecondHand] {
            if let Some(style) = out.get_mut(tag) {
                style.visibility = Visibility::from_flag(style.visibility.is_visible() && seconds);
            }
        }

        let (hour, minute, second) = hand_angles(inputs);
        for (tag, angle) in [
            (ElementTag::HourHand, hour),
            (ElementTag::MinuteHand, minute),
            (ElementTag::SecondHand, second),
        ] {
            if let Some(style) = out.get_mut(tag) {
                style.rotation = angle;
            }
        }

        out.background = FACE_BACKGROUND;
        out.chart = ChartStyle::from_colors(
            &self.colors,
            self.document.point_size.unwrap_or(DEFAULT_POINT_SIZE),
        );
        out
    }

    fn apply_record(&self, style: &mut ElementStyle, record: &StyleRecord, palette: &ResolvedPalette) {
        let device = &self.device;
        style.width = record
            .width
            .map_or(Dimension::WrapContent, |w| Dimension::Px(device.to_device(w)));
        style.height = record
            .height
            .map_or(Dimension::WrapContent, |h| Dimension::Px(device.to_device(h)));
        style.top_margin = device.to_device(record.topmargin.unwrap_or(0));
        style.left_margin = device.to_device(record.leftmargin.unwrap_or(0));
        style.visibility = record
            .visibility
            .as_deref()
            .map_or(Visibility::Hidden, Visibility::from_key);

        match style.tag.kind() {
            ElementKind::Text => {
                style.rotation = record.rotation.unwrap_or(0) as f32;
                let text = style.text.get_or_insert_with(Default::default);
                text.size_px = device.to_device(record.textsize.unwrap_or(DEFAULT_TEXT_SIZE));
                text.gravity = record
                    .gravity
                    .as_deref()
                    .map_or(Gravity::Center, Gravity::from_key);
                text.font = record
                    .font
                    .as_deref()
                    .map_or(FontFamily::SansSerif, FontFamily::from_key);
                text.font_style = record
                    .font_style
                    .as_deref()
                    .map_or(FontStyle::Normal, FontStyle::from_key);
                if let Some(spec) = record.font_color.as_deref() {
                    match palette.resolve(spec) {
                        Ok(color) => text.color = color,
                        Err(e) => log::warn!("{}: fontColor {e} -- keeping current color", style.tag.key()),
                    }
                }
            }
            ElementKind::Image => {
                style.image = Some(resolve_image(style.tag, &self.bundle, record, palette));
            }
            ElementKind::Chart => {}
        }
    }
}

/// Theme overrides that follow the live data rather than the document.
fn apply_mode_colors(style: &mut ElementStyle, palette: &ResolvedPalette, inputs: &ThemeInputs) {
    let tag = style.tag;
    let Some(text) = style.text.as_mut() else {
        return;
    };
    match tag {
        ElementTag::Sgv | ElementTag::Direction => text.color = palette.bg_color,
        ElementTag::Timestamp if inputs.data_age == DataAge::Stale => {
            text.color = STALE_TIMESTAMP_COLOR;
        }
        ElementTag::UploaderBattery if inputs.battery == BatteryLevel::Low => {
            text.color = palette.colors.low_bat;
        }
        ElementTag::Loop => {
            text.background = Some(match inputs.loop_status {
                LoopStatus::Active => PlatformIcon::LOOP_GREEN,
                LoopStatus::Warning => PlatformIcon::LOOP_GREY,
                LoopStatus::Error => PlatformIcon::LOOP_RED,
            });
        }
        _ => {}
    }
}

/// Hour, minute and second hand angles in degrees.
pub fn hand_angles(inputs: &ThemeInputs) -> (f32, f32, f32) {
    let t = inputs.time;
    let second = f32::from(t.second) * 6.0;
    let minute = f32::from(t.minute) * 6.0;
    let hour = f32::from(t.hour) * 30.0 + f32::from(t.minute) * 0.5;
    (hour, minute, second)
}

//! Drawable assets: the keyed bundle shipped with a skin, platform fallback
//! icons, and image resolution for image elements.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use serde::Serialize;

use cwf_types::error::{CwfError, Result};

use crate::document::StyleRecord;
use crate::elements::ElementTag;
use crate::palette::{ColorMatrix, ResolvedPalette};

/// A built-in icon resource provided by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlatformIcon(pub &'static str);

impl PlatformIcon {
    pub const WATCHFACE_CUSTOM: PlatformIcon = PlatformIcon("watchface_custom");
    pub const SIMPLIFIED_DIAL: PlatformIcon = PlatformIcon("simplified_dial");
    pub const HOUR_HAND: PlatformIcon = PlatformIcon("hour_hand");
    pub const MINUTE_HAND: PlatformIcon = PlatformIcon("minute_hand");
    pub const SECOND_HAND: PlatformIcon = PlatformIcon("second_hand");
    pub const LOOP_GREEN: PlatformIcon = PlatformIcon("loop_green_25");
    pub const LOOP_GREY: PlatformIcon = PlatformIcon("loop_grey_25");
    pub const LOOP_RED: PlatformIcon = PlatformIcon("loop_red_25");

    pub fn name(self) -> &'static str {
        self.0
    }
}

/// Closed set of keys under which a skin may ship drawables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DrawableKey {
    /// Preview image of the whole face.
    CustomWatchface,
    Background,
    CoverChart,
    CoverPlate,
    HourHand,
    MinuteHand,
    SecondHand,
}

impl DrawableKey {
    pub const ALL: [DrawableKey; 7] = [
        Self::CustomWatchface,
        Self::Background,
        Self::CoverChart,
        Self::CoverPlate,
        Self::HourHand,
        Self::MinuteHand,
        Self::SecondHand,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::CustomWatchface => "customWatchface",
            Self::Background => "background",
            Self::CoverChart => "cover_chart",
            Self::CoverPlate => "cover_plate",
            Self::HourHand => "hour_hand",
            Self::MinuteHand => "minute_hand",
            Self::SecondHand => "second_hand",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Host icon used when the bundle has no bytes for this key. The custom
    /// background and chart cover layers have none.
    pub fn fallback_icon(self) -> Option<PlatformIcon> {
        match self {
            Self::CustomWatchface => Some(PlatformIcon::WATCHFACE_CUSTOM),
            Self::Background | Self::CoverChart => None,
            Self::CoverPlate => Some(PlatformIcon::SIMPLIFIED_DIAL),
            Self::HourHand => Some(PlatformIcon::HOUR_HAND),
            Self::MinuteHand => Some(PlatformIcon::MINUTE_HAND),
            Self::SecondHand => Some(PlatformIcon::SECOND_HAND),
        }
    }
}

/// Encoding of a bundled drawable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DrawableFormat {
    #[default]
    Png,
}

/// Raw drawable bytes plus their format tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawableData {
    pub bytes: Arc<[u8]>,
    pub format: DrawableFormat,
}

impl DrawableData {
    pub fn png(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
            format: DrawableFormat::Png,
        }
    }
}

/// Drawables shipped with a skin, keyed by `DrawableKey`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBundle {
    drawables: HashMap<DrawableKey, DrawableData>,
}

impl AssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: DrawableKey, data: DrawableData) {
        self.drawables.insert(key, data);
    }

    pub fn get(&self, key: DrawableKey) -> Option<&DrawableData> {
        self.drawables.get(&key)
    }

    pub fn contains(&self, key: DrawableKey) -> bool {
        self.drawables.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DrawableKey, &DrawableData)> {
        self.drawables.iter()
    }
}

/// Where an image element's pixels come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ImageSource {
    /// Decoded from the skin's bundle.
    Bundled {
        key: DrawableKey,
        width: u32,
        height: u32,
        #[serde(skip)]
        bytes: Arc<[u8]>,
    },
    /// A host built-in icon.
    Platform { icon: PlatformIcon },
}

/// Resolved image parameters for one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageStyle {
    /// `None` renders the element with no image.
    pub source: Option<ImageSource>,
    pub tint: Option<ColorMatrix>,
}

/// Read the dimensions of a PNG, validating its header.
pub fn decode_png_header(bytes: &[u8]) -> Result<(u32, u32)> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let reader = decoder
        .read_info()
        .map_err(|e| CwfError::Image(e.to_string()))?;
    let info = reader.info();
    Ok((info.width, info.height))
}

/// Resolve the image for `tag`.
///
/// Bundled bytes always win over the platform icon. Undecodable bytes fall
/// through to the platform icon; when neither exists the element simply has
/// no image. The record's `color`, if any, becomes the tint.
pub fn resolve_image(
    tag: ElementTag,
    bundle: &AssetBundle,
    record: &StyleRecord,
    palette: &ResolvedPalette,
) -> ImageStyle {
    let tint = record.color.as_deref().and_then(|spec| match palette.resolve(spec) {
        Ok(color) => Some(ColorMatrix::tint(color)),
        Err(e) => {
            log::warn!("{}: tint {e} -- leaving untinted", tag.key());
            None
        }
    });

    let Some(key) = tag.drawable_key() else {
        return ImageStyle { source: None, tint };
    };

    if let Some(data) = bundle.get(key) {
        match decode_png_header(&data.bytes) {
            Ok((width, height)) => {
                return ImageStyle {
                    source: Some(ImageSource::Bundled {
                        key,
                        width,
                        height,
                        bytes: Arc::clone(&data.bytes),
                    }),
                    tint,
                };
            }
            Err(e) => {
                log::warn!("{}: bundled drawable unusable ({e}) -- using platform icon", key.key());
            }
        }
    }

    ImageStyle {
        source: key
            .fallback_icon()
            .map(|icon| ImageSource::Platform { icon }),
        tint,
    }
}

#[cfg(test)]
pub(crate) mod test_png {
    /// Encode a small opaque RGBA PNG.
    pub fn encode(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            let data = vec![255u8; (width * height * 4) as usize];
            writer.write_image_data(&data).unwrap();
        }
        buf
    }
}

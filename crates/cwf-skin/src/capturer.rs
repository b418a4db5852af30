//! Capture of a live element set back into a skin document.
//!
//! Used to author the stock default skin: every length is divided back into
//! reference units and every enumeration is written by its key.

use cwf_platform::{ResourceService, TimeService};
use cwf_types::Color;

use crate::assets::{AssetBundle, DrawableData, DrawableKey, PlatformIcon};
use crate::document::{SkinDocument, SkinMetadata, StyleRecord};
use crate::geometry::{DeviceContext, Dimension};
use crate::palette::SessionColors;
use crate::store::SkinPackage;
use crate::style::{ElementStyle, ElementStyleSet};

pub const DEFAULT_SKIN_NAME: &str = "Default Watchface";
pub const DEFAULT_SKIN_FILENAME: &str = "DefaultWatchface";
pub const DEFAULT_AUTHOR: &str = "cwf";
/// Schema version stamped on captured documents.
pub const FORMAT_VERSION: &str = "v0.1";
pub const CAPTURED_POINT_SIZE: i32 = 2;

/// Capture `current` as a skin.
///
/// The preview raster is read from `resources`; if that read fails the bundle
/// is left empty and the failure is only logged.
pub fn capture<T, R>(
    current: &ElementStyleSet,
    device: &DeviceContext,
    colors: &SessionColors,
    clock: &T,
    resources: &R,
) -> SkinPackage
where
    T: TimeService + ?Sized,
    R: ResourceService + ?Sized,
{
    let created_at = match clock.now() {
        Ok(now) => Some(now.date_string()),
        Err(e) => {
            log::warn!("capture: clock unavailable ({e}) -- leaving createdAt unset");
            None
        }
    };

    let mut document = SkinDocument {
        metadata: SkinMetadata {
            name: Some(DEFAULT_SKIN_NAME.into()),
            filename: Some(DEFAULT_SKIN_FILENAME.into()),
            author: Some(DEFAULT_AUTHOR.into()),
            created_at,
            version: Some(FORMAT_VERSION.into()),
        },
        high_color: Some(colors.high.to_hex()),
        mid_color: Some(colors.mid.to_hex()),
        low_color: Some(colors.low.to_hex()),
        low_bat_color: Some(colors.low_bat.to_hex()),
        carb_color: Some(colors.carb.to_hex()),
        grid_color: Some(Color::WHITE.to_hex()),
        point_size: Some(CAPTURED_POINT_SIZE),
        enable_second: Some(true),
        elements: Default::default(),
    };

    for style in current.iter() {
        document
            .elements
            .insert(style.tag.key().to_string(), capture_element(style, device));
    }

    let mut bundle = AssetBundle::new();
    let preview = PlatformIcon::WATCHFACE_CUSTOM;
    match resources.read_resource(preview.name()) {
        Ok(bytes) => bundle.insert(DrawableKey::CustomWatchface, DrawableData::png(bytes)),
        Err(e) => log::warn!("capture: {e} -- skin has no preview image"),
    }

    SkinPackage::new(document, bundle)
}

fn capture_element(style: &ElementStyle, device: &DeviceContext) -> StyleRecord {
    let unscale = |d: Dimension| d.px().map(|px| device.to_reference(px));
    let mut record = StyleRecord {
        width: unscale(style.width),
        height: unscale(style.height),
        topmargin: Some(device.to_reference(style.top_margin)),
        leftmargin: Some(device.to_reference(style.left_margin)),
        visibility: Some(style.visibility.key().to_string()),
        ..Default::default()
    };
    if let Some(text) = &style.text {
        record.rotation = Some(style.rotation.round() as i32);
        record.textsize = Some(device.to_reference(text.size_px));
        record.gravity = Some(text.gravity.key().to_string());
        record.font = Some(text.font.key().to_string());
        record.font_style = Some(text.font_style.key().to_string());
        record.font_color = Some(text.color.to_hex());
    }
    record
}

//! Reference-resolution to device-resolution scaling.
//!
//! Skins are authored on a 400-unit square. Every length in a skin (size,
//! margins, text size) is multiplied by the device zoom factor on apply and
//! divided by it on capture.

use serde::Serialize;

use cwf_platform::DisplayService;
use cwf_types::error::{CwfError, Result};

/// Width of the authoring coordinate space.
pub const REFERENCE_RESOLUTION: u32 = 400;

/// Device metrics, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceContext {
    width_px: u32,
    zoom_factor: f64,
}

impl DeviceContext {
    /// Build a context for a display `width_px` pixels wide.
    pub fn new(width_px: u32) -> Result<Self> {
        if width_px == 0 {
            return Err(CwfError::InvalidDeviceContext(
                "display width is 0".into(),
            ));
        }
        Ok(Self {
            width_px,
            zoom_factor: f64::from(width_px) / f64::from(REFERENCE_RESOLUTION),
        })
    }

    /// A 1:1 context used when the display cannot be measured.
    pub fn degraded() -> Self {
        Self {
            width_px: REFERENCE_RESOLUTION,
            zoom_factor: 1.0,
        }
    }

    /// Query the display once, degrading to zoom 1 on failure.
    pub fn from_display<D: DisplayService + ?Sized>(display: &D) -> Self {
        match display.display_width().and_then(Self::new) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("{e} -- using zoom factor 1");
                Self::degraded()
            }
        }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Scale reference units to device pixels.
    pub fn to_device(&self, units: i32) -> i32 {
        to_device(units, self.zoom_factor)
    }

    /// Scale device pixels back to reference units.
    pub fn to_reference(&self, pixels: i32) -> i32 {
        to_reference(pixels, self.zoom_factor)
    }
}

/// `round(units * zoom)`.
pub fn to_device(units: i32, zoom_factor: f64) -> i32 {
    (f64::from(units) * zoom_factor).round() as i32
}

/// `round(pixels / zoom)`. `zoom_factor` must be positive.
pub fn to_reference(pixels: i32, zoom_factor: f64) -> i32 {
    (f64::from(pixels) / zoom_factor).round() as i32
}

/// A layout dimension: either the element's natural size or a pixel length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    #[default]
    WrapContent,
    Px(i32),
}

impl Dimension {
    pub fn px(self) -> Option<i32> {
        match self {
            Self::WrapContent => None,
            Self::Px(px) => Some(px),
        }
    }
}

//! Color resolution: session palette, level-dependent background color, and
//! the tint transform applied to monochrome icons.

use serde::Serialize;

use cwf_platform::TrendLevel;
use cwf_types::color::{Color, parse_color};
use cwf_types::error::Result;

use crate::document::SkinDocument;
use crate::inputs::ThemeInputs;

/// Color spec that resolves to the level-dependent background color.
pub const BG_COLOR_SENTINEL: &str = "bgColor";

pub const DEFAULT_HIGH_COLOR: Color = Color::YELLOW;
pub const DEFAULT_MID_COLOR: Color = Color::GREEN;
pub const DEFAULT_LOW_COLOR: Color = Color::RED;
pub const DEFAULT_LOW_BAT_COLOR: Color = Color::RED;
pub const DEFAULT_CARB_COLOR: Color = Color::rgb(0xFB, 0x8C, 0x00);
pub const DEFAULT_GRID_COLOR: Color = Color::WHITE;

/// Face background in every mode.
pub const FACE_BACKGROUND: Color = Color::BLACK;
/// Timestamp text color once the last reading is stale.
pub const STALE_TIMESTAMP_COLOR: Color = Color::rgb(0xC0, 0xC0, 0xC0);
pub const BASAL_BACKGROUND_COLOR: Color = Color::rgb(0x00, 0x00, 0xFF);
pub const BASAL_CENTER_COLOR: Color = Color::rgb(0x8C, 0x9E, 0xFF);

/// Palette colors read from the skin document once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionColors {
    pub high: Color,
    pub mid: Color,
    pub low: Color,
    pub low_bat: Color,
    pub carb: Color,
    pub grid: Color,
}

impl Default for SessionColors {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_COLOR,
            mid: DEFAULT_MID_COLOR,
            low: DEFAULT_LOW_COLOR,
            low_bat: DEFAULT_LOW_BAT_COLOR,
            carb: DEFAULT_CARB_COLOR,
            grid: DEFAULT_GRID_COLOR,
        }
    }
}

impl SessionColors {
    /// Resolve the top-level colors of `doc`, keeping the built-in default
    /// for any that are absent or malformed.
    pub fn from_document(doc: &SkinDocument) -> Self {
        let d = Self::default();
        Self {
            high: color_or(doc.high_color.as_deref(), "highColor", d.high),
            mid: color_or(doc.mid_color.as_deref(), "midColor", d.mid),
            low: color_or(doc.low_color.as_deref(), "lowColor", d.low),
            low_bat: color_or(doc.low_bat_color.as_deref(), "lowBatColor", d.low_bat),
            carb: color_or(doc.carb_color.as_deref(), "carbColor", d.carb),
            grid: color_or(doc.grid_color.as_deref(), "gridColor", d.grid),
        }
    }
}

fn color_or(spec: Option<&str>, field: &str, fallback: Color) -> Color {
    match spec.map(parse_color) {
        Some(Ok(c)) => c,
        Some(Err(e)) => {
            log::warn!("{field}: {e} -- using {}", fallback.to_hex());
            fallback
        }
        None => fallback,
    }
}

/// The palette for one render tick. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub colors: SessionColors,
    /// Level-dependent color behind the `bgColor` sentinel.
    pub bg_color: Color,
}

impl ResolvedPalette {
    pub fn for_tick(colors: &SessionColors, inputs: &ThemeInputs) -> Self {
        let bg_color = match inputs.trend {
            TrendLevel::AboveRange => colors.high,
            TrendLevel::InRange => colors.mid,
            TrendLevel::BelowRange => colors.low,
            TrendLevel::Unknown => colors.mid,
        };
        Self {
            colors: *colors,
            bg_color,
        }
    }

    /// Resolve a color spec: the `bgColor` sentinel or a parseable color.
    pub fn resolve(&self, spec: &str) -> Result<Color> {
        if spec == BG_COLOR_SENTINEL {
            Ok(self.bg_color)
        } else {
            parse_color(spec)
        }
    }
}

/// A 4x5 color transform in row-major order, laid out as
/// `[R' G' B' A'] = M * [R G B A 1]` with offsets in 0..255 units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorMatrix(pub [f32; 20]);

impl ColorMatrix {
    pub const IDENTITY: ColorMatrix = ColorMatrix([
        1.0, 0.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0, //
    ]);

    /// Saturation adjustment: 0 is grayscale, 1 leaves colors unchanged.
    pub fn saturation(sat: f32) -> Self {
        let inv = 1.0 - sat;
        let r = 0.213 * inv;
        let g = 0.715 * inv;
        let b = 0.072 * inv;
        ColorMatrix([
            r + sat, g, b, 0.0, 0.0, //
            r, g + sat, b, 0.0, 0.0, //
            r, g, b + sat, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0, //
        ])
    }

    /// Independent per-channel scale.
    pub fn scale(r: f32, g: f32, b: f32, a: f32) -> Self {
        ColorMatrix([
            r, 0.0, 0.0, 0.0, 0.0, //
            0.0, g, 0.0, 0.0, 0.0, //
            0.0, 0.0, b, 0.0, 0.0, //
            0.0, 0.0, 0.0, a, 0.0, //
        ])
    }

    /// Tint that desaturates an icon and then recolors it toward `color`.
    pub fn tint(color: Color) -> Self {
        Self::saturation(0.0).post_concat(&Self::scale(
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
            f32::from(color.a) / 255.0,
        ))
    }

    /// `post * self`: apply `self` first, then `post`.
    pub fn post_concat(&self, post: &ColorMatrix) -> Self {
        let a = &post.0;
        let b = &self.0;
        let mut out = [0.0f32; 20];
        for row in 0..4 {
            for col in 0..5 {
                let mut v = 0.0;
                for k in 0..4 {
                    v += a[row * 5 + k] * b[k * 5 + col];
                }
                if col == 4 {
                    v += a[row * 5 + 4];
                }
                out[row * 5 + col] = v;
            }
        }
        ColorMatrix(out)
    }

    /// Transform a single color, clamping each channel.
    pub fn apply(&self, c: Color) -> Color {
        let input = [
            f32::from(c.r),
            f32::from(c.g),
            f32::from(c.b),
            f32::from(c.a),
        ];
        let m = &self.0;
        let channel = |row: usize| -> u8 {
            let v = m[row * 5] * input[0]
                + m[row * 5 + 1] * input[1]
                + m[row * 5 + 2] * input[2]
                + m[row * 5 + 3] * input[3]
                + m[row * 5 + 4];
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::rgba(channel(0), channel(1), channel(2), channel(3))
    }
}

//! Skin engine for the custom watchface.
//!
//! A skin is a JSON document plus a bundle of PNG drawables. Applying it to
//! the host's element set yields a fully resolved `ElementStyleSet` for one
//! render tick; capturing a live element set produces a document in the same
//! schema. Skins are authored on a 400-unit reference square and scaled to the
//! device on apply.

pub mod applier;
pub mod assets;
pub mod builtin;
pub mod capturer;
pub mod codec;
pub mod document;
pub mod elements;
pub mod geometry;
pub mod inputs;
pub mod palette;
pub mod session;
pub mod store;
pub mod style;

pub use applier::SkinApplier;
pub use assets::{AssetBundle, DrawableData, DrawableKey, ImageSource, ImageStyle, PlatformIcon};
pub use builtin::default_layout;
pub use capturer::capture;
pub use codec::{FontFamily, FontStyle, Gravity, Visibility};
pub use document::{SkinDocument, SkinMetadata, StyleRecord};
pub use elements::{ElementKind, ElementTag};
pub use geometry::{DeviceContext, Dimension, REFERENCE_RESOLUTION};
pub use inputs::ThemeInputs;
pub use palette::{ColorMatrix, ResolvedPalette, SessionColors};
pub use session::WatchfaceSession;
pub use store::{DEFAULT_SKIN_KEY, MemorySkinStore, SkinPackage, SkinStore};
pub use style::{ChartStyle, ElementStyle, ElementStyleSet, TextStyle};

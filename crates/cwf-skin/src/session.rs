//! One skin activation: device metrics, the host's base layout and the
//! applier, re-evaluated every render tick.

use cwf_platform::{FeedSnapshot, Platform};
use cwf_types::error::Result;

use crate::applier::SkinApplier;
use crate::builtin::default_layout;
use crate::capturer::capture;
use crate::geometry::DeviceContext;
use crate::inputs::ThemeInputs;
use crate::palette::SessionColors;
use crate::store::{DEFAULT_SKIN_KEY, SkinPackage, SkinStore};
use crate::style::ElementStyleSet;

/// An active skin.
#[derive(Debug)]
pub struct WatchfaceSession {
    base: ElementStyleSet,
    applier: SkinApplier,
}

impl WatchfaceSession {
    /// Activate the skin stored under `active`.
    ///
    /// `active` is read from `store` first, then the default skin is captured
    /// from the built-in layout and written under [`DEFAULT_SKIN_KEY`]. If
    /// `active` cannot be loaded the session runs the default skin instead.
    pub fn activate<P>(store: &mut dyn SkinStore, platform: &P, active: &str) -> Result<Self>
    where
        P: Platform + ?Sized,
    {
        let device = DeviceContext::from_display(platform);
        let base = default_layout(&device)?;

        let default_skin = capture(&base, &device, &SessionColors::default(), platform, platform);

        let loaded = match store.load(active) {
            Ok(Some(skin)) => Some(skin),
            Ok(None) => {
                log::info!("no skin named '{active}' -- using default skin");
                None
            }
            Err(e) => {
                log::warn!("loading skin '{active}' failed: {e} -- using default skin");
                None
            }
        };

        if let Err(e) = store.store(DEFAULT_SKIN_KEY, default_skin.clone()) {
            log::warn!("could not store default skin: {e}");
        }
        let skin = loaded.unwrap_or(default_skin);

        log::info!(
            "activated skin '{}' at {}px (zoom {:.3})",
            skin.document.metadata.name.as_deref().unwrap_or(active),
            device.width_px(),
            device.zoom_factor(),
        );
        Ok(Self::with_skin(base, skin, device))
    }

    /// Build a session from an explicit base layout and skin.
    pub fn with_skin(base: ElementStyleSet, skin: SkinPackage, device: DeviceContext) -> Self {
        Self {
            base,
            applier: SkinApplier::new(skin.document, skin.bundle, device),
        }
    }

    pub fn applier(&self) -> &SkinApplier {
        &self.applier
    }

    /// The host layout every tick starts from.
    pub fn base(&self) -> &ElementStyleSet {
        &self.base
    }

    /// Poll the platform once and resolve this tick's element styles.
    pub fn render<P>(&self, platform: &P) -> ElementStyleSet
    where
        P: Platform + ?Sized,
    {
        self.applier.apply(&self.base, &poll_inputs(platform))
    }
}

/// Read this tick's inputs. Feed or clock failures fall back to defaults.
pub fn poll_inputs<P: Platform + ?Sized>(platform: &P) -> ThemeInputs {
    let feed = platform.snapshot().unwrap_or_else(|e| {
        log::warn!("data feed unavailable: {e}");
        FeedSnapshot::default()
    });
    let time = match platform.now() {
        Ok(now) => now.clock(),
        Err(e) => {
            log::warn!("clock unavailable: {e}");
            Default::default()
        }
    };
    ThemeInputs::from_feed(feed, time, platform.show_seconds())
}

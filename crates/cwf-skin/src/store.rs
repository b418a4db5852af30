//! Skin persistence seam.
//!
//! Skins are stored as opaque (document, bundle) pairs keyed by name. The
//! real store belongs to the host; `MemorySkinStore` backs tests and the
//! command line tool.

use std::collections::HashMap;

use cwf_types::error::Result;

use crate::assets::AssetBundle;
use crate::document::SkinDocument;

/// Name the stock default skin is stored under.
pub const DEFAULT_SKIN_KEY: &str = "default";

/// A skin document together with its drawables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinPackage {
    pub document: SkinDocument,
    pub bundle: AssetBundle,
}

impl SkinPackage {
    pub fn new(document: SkinDocument, bundle: AssetBundle) -> Self {
        Self { document, bundle }
    }

    /// The document as 4-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        self.document.to_json_pretty()
    }
}

/// Key-value store of skins by name.
pub trait SkinStore {
    /// `Ok(None)` when nothing is stored under `name`.
    fn load(&self, name: &str) -> Result<Option<SkinPackage>>;

    fn store(&mut self, name: &str, skin: SkinPackage) -> Result<()>;
}

/// In-memory skin store.
#[derive(Debug, Default)]
pub struct MemorySkinStore {
    skins: HashMap<String, SkinPackage>,
}

impl MemorySkinStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }
}

impl SkinStore for MemorySkinStore {
    fn load(&self, name: &str) -> Result<Option<SkinPackage>> {
        Ok(self.skins.get(name).cloned())
    }

    fn store(&mut self, name: &str, skin: SkinPackage) -> Result<()> {
        log::debug!("storing skin '{name}'");
        self.skins.insert(name.to_string(), skin);
        Ok(())
    }
}

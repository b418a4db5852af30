//! Skins on disk: a JSON document with its drawables beside it as
//! `<drawable key>.png`.

use std::path::Path;

use anyhow::{Context, Result};

use cwf_skin::{AssetBundle, DrawableData, DrawableKey, SkinDocument, SkinPackage};

/// Read the skin at `path` and any drawables in the same directory.
pub fn read_skin(path: &Path) -> Result<SkinPackage> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading skin {}", path.display()))?;
    let document = SkinDocument::from_json(&json)
        .with_context(|| format!("parsing skin {}", path.display()))?;

    let dir = path.parent().unwrap_or(Path::new("."));
    let mut bundle = AssetBundle::new();
    for key in DrawableKey::ALL {
        let file = dir.join(format!("{}.png", key.key()));
        if !file.is_file() {
            continue;
        }
        let bytes = std::fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
        log::debug!("bundled {} ({} bytes)", key.key(), bytes.len());
        bundle.insert(key, DrawableData::png(bytes));
    }
    Ok(SkinPackage::new(document, bundle))
}

/// Write `skin` to `path`, with its drawables beside it.
pub fn write_skin(path: &Path, skin: &SkinPackage) -> Result<()> {
    std::fs::write(path, skin.to_json_pretty()?)
        .with_context(|| format!("writing skin {}", path.display()))?;
    let dir = path.parent().unwrap_or(Path::new("."));
    for (key, data) in skin.bundle.iter() {
        let file = dir.join(format!("{}.png", key.key()));
        std::fs::write(&file, &data.bytes).with_context(|| format!("writing {}", file.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_collects_drawables() {
        let dir = tempfile::tempdir().unwrap();
        let skin = dir.path().join("night.json");
        std::fs::write(&skin, r#"{ "sgv": { "visibility": "visible" } }"#).unwrap();
        std::fs::write(dir.path().join("hour_hand.png"), b"png").unwrap();
        std::fs::write(dir.path().join("unrelated.png"), b"png").unwrap();

        let pkg = read_skin(&skin).unwrap();
        assert!(pkg.document.style("sgv").is_some());
        assert_eq!(pkg.bundle.len(), 1);
        assert!(pkg.bundle.contains(DrawableKey::HourHand));
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_skin(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut bundle = AssetBundle::new();
        bundle.insert(DrawableKey::CustomWatchface, DrawableData::png(vec![1u8, 2, 3]));
        let doc = SkinDocument::from_json(r#"{ "pointSize": 2 }"#).unwrap();
        write_skin(&path, &SkinPackage::new(doc.clone(), bundle)).unwrap();

        let back = read_skin(&path).unwrap();
        assert_eq!(back.document, doc);
        let data = back.bundle.get(DrawableKey::CustomWatchface).unwrap();
        assert_eq!(&*data.bytes, &[1, 2, 3]);
    }
}

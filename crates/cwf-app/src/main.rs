//! Custom watchface command line entry point.
//!
//! `cwf-app [apply] [SKIN]` activates a skin on a simulated display and prints
//! the resolved element styles for the current tick as JSON.
//! `cwf-app default [OUT]` captures the built-in layout as the default skin and
//! writes it to `OUT` (or stdout).
//!
//! Host settings come from `cwf.toml` in the working directory; the
//! `CWF_SKIN` environment variable overrides the configured skin path.

mod skin_files;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use cwf_platform::HostPlatform;
use cwf_skin::{DEFAULT_SKIN_KEY, MemorySkinStore, SkinStore, WatchfaceSession};
use cwf_types::WatchfaceConfig;

const CONFIG_FILE: &str = "cwf.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WatchfaceConfig::load_or_default(Path::new(CONFIG_FILE))?;
    log::info!(
        "Starting watchface preview ({}px, seconds {})",
        config.device_width,
        if config.show_seconds { "on" } else { "off" },
    );
    let platform = HostPlatform::new(
        config.device_width,
        config.show_seconds,
        config.resources_dir.clone(),
    );

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("default") => write_default(&platform, args.next().map(PathBuf::from)),
        Some("apply") => apply(&platform, &config, args.next()),
        other => apply(&platform, &config, other.map(str::to_owned)),
    }
}

/// Activate a skin and print this tick's element styles.
fn apply(platform: &HostPlatform, config: &WatchfaceConfig, skin_arg: Option<String>) -> Result<()> {
    let skin_path = skin_arg
        .or_else(|| std::env::var("CWF_SKIN").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| config.skin_path.clone());

    let mut store = MemorySkinStore::new();
    match skin_files::read_skin(&skin_path) {
        Ok(skin) => {
            log::info!(
                "Loaded skin {} ({} drawables)",
                skin_path.display(),
                skin.bundle.len()
            );
            store.store(&config.skin_name, skin)?;
        }
        Err(e) => log::warn!("{e:#} -- falling back to the default skin"),
    }

    let session = WatchfaceSession::activate(&mut store, platform, &config.skin_name)?;
    let styles = session.render(platform);
    println!("{}", serde_json::to_string_pretty(&styles)?);
    Ok(())
}

/// Capture the built-in layout and write it as the default skin.
fn write_default(platform: &HostPlatform, out: Option<PathBuf>) -> Result<()> {
    let mut store = MemorySkinStore::new();
    WatchfaceSession::activate(&mut store, platform, DEFAULT_SKIN_KEY)?;
    let skin = store
        .load(DEFAULT_SKIN_KEY)?
        .context("default skin was not stored")?;

    match out {
        Some(path) => {
            skin_files::write_skin(&path, &skin)?;
            log::info!("Wrote default skin to {}", path.display());
        }
        None => println!("{}", skin.to_json_pretty()?),
    }
    Ok(())
}

//! Batch generator for brand logo assets.
//!
//! Reads a brand list, then writes one SVG logo and two PNG renditions per
//! brand into a directory named after the brand id.

pub mod config;
pub mod raster;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use logo_composer::{make_document, save_svg};
use raster::Rasterizer;

pub fn run_batch(config_path: &Path, out_root: &Path) -> Result<()> {
    let brands = config::load_brands(config_path)?;

    let rasterizer = Rasterizer::detect();
    if !rasterizer.is_available() {
        log::warn!("no system fonts found, skipping png export");
    }

    for brand in &brands {
        let dir = out_root.join(&brand.id);
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

        let document = make_document(&brand.name, &brand.domain, &brand.badge);
        let svg_path = dir.join("logo.svg");
        save_svg(&svg_path, &document)
            .with_context(|| format!("writing {}", svg_path.display()))?;
        println!("wrote {}", svg_path.display());

        // A failed rendition only costs that file; the rest of the batch
        // still runs.
        for result in rasterizer.export_pngs(&document.to_string(), &dir) {
            match result {
                Ok(path) => println!("wrote {}", path.display()),
                Err(e) => log::warn!("brand {:?}: png export failed: {e:#}", brand.id),
            }
        }
    }
    Ok(())
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use resvg::{tiny_skia, usvg};

/// File name and scale factor of each raster rendition.
pub const RENDITIONS: [(&str, f32); 2] = [("logo.png", 1.0), ("logo@2x.png", 2.0)];

/// PNG export capability, probed once at startup.
pub enum Rasterizer {
    Fonts(Arc<usvg::fontdb::Database>),
    Absent,
}

impl Rasterizer {
    // Rendering the logo text needs real font faces. An empty database
    // would rasterize every glyph to nothing, so it counts as the
    // capability being absent.
    pub fn detect() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        if fontdb.is_empty() {
            Rasterizer::Absent
        } else {
            Rasterizer::Fonts(Arc::new(fontdb))
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Rasterizer::Fonts(_))
    }

    /// Renders every rendition of `svg_text` into `dir`. Absent capability
    /// renders nothing and reports nothing; per-file failures come back as
    /// individual errors so the caller can keep going.
    pub fn export_pngs(&self, svg_text: &str, dir: &Path) -> Vec<Result<PathBuf>> {
        let Rasterizer::Fonts(fontdb) = self else {
            return Vec::new();
        };
        let options = usvg::Options {
            fontdb: Arc::clone(fontdb),
            ..usvg::Options::default()
        };
        let tree = match usvg::Tree::from_str(svg_text, &options) {
            Ok(tree) => tree,
            Err(e) => return vec![Err(anyhow::Error::new(e).context("parsing logo markup"))],
        };
        RENDITIONS
            .iter()
            .map(|&(name, scale)| render_png(&tree, scale, dir.join(name)))
            .collect()
    }
}

fn render_png(tree: &usvg::Tree, scale: f32, path: PathBuf) -> Result<PathBuf> {
    let width = (tree.size().width() * scale).round() as u32;
    let height = (tree.size().height() * scale).round() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .with_context(|| format!("allocating a {width}x{height} pixmap"))?;
    resvg::render(
        tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    pixmap
        .save_png(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

mod badge;
mod initials;
mod logo;

pub use badge::{make_badge, Badge, Gradient, Outline, Shape};
pub use initials::derive_initials;
pub use logo::make_document;

pub const LOGO_WIDTH: u32 = 800;
pub const LOGO_HEIGHT: u32 = 220;

pub(crate) const FONT_STACK: &str = "Arial, Helvetica, sans-serif";

pub fn save_svg<T>(path: T, document: &svg::Document) -> Result<(), std::io::Error>
where
    T: std::convert::AsRef<std::path::Path>,
{
    svg::save(path, document)
}

// svg::node::Text writes its content verbatim, so anything operator-supplied
// has to be escaped before it goes in. '&' first, or it would re-escape the
// entities it just produced.
pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

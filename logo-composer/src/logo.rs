use color_lib::color::to_string;
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

use crate::badge::{make_badge, Badge};
use crate::{xml_escape, FONT_STACK, LOGO_HEIGHT, LOGO_WIDTH};

const MARGIN: f32 = 24.0;
const TEXT_X: f32 = 120.0;
const TITLE_Y: f32 = 82.0;
const TITLE_SIZE: f32 = 56.0;
const CAPTION_Y: f32 = 116.0;
const CAPTION_SIZE: f32 = 22.0;
const DEFAULT_TITLE_COLOR: &str = "#111827";
const CAPTION_COLOR: &str = "#6B7280";

// Fixed layout: badge at the margin, title and caption to its right. The
// title takes the accent color when the brand has one.
pub fn make_document(name: &str, domain: &str, badge: &Badge) -> Document {
    let title_color = match badge.accent {
        Some(accent) => to_string(&accent),
        None => DEFAULT_TITLE_COLOR.to_string(),
    };
    Document::new()
        .set("width", LOGO_WIDTH)
        .set("height", LOGO_HEIGHT)
        .set("viewBox", (0u32, 0u32, LOGO_WIDTH, LOGO_HEIGHT))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", "white"),
        )
        .add(
            Group::new()
                .set("transform", format!("translate({},{})", MARGIN, MARGIN))
                .add(make_badge(badge))
                .add(
                    Text::new()
                        .set("x", TEXT_X)
                        .set("y", TITLE_Y)
                        .set("font-family", FONT_STACK)
                        .set("font-size", TITLE_SIZE)
                        .set("font-weight", 700)
                        .set("fill", title_color)
                        .add(svg::node::Text::new(xml_escape(name))),
                )
                .add(
                    Text::new()
                        .set("x", TEXT_X)
                        .set("y", CAPTION_Y)
                        .set("font-family", FONT_STACK)
                        .set("font-size", CAPTION_SIZE)
                        .set("fill", CAPTION_COLOR)
                        .add(svg::node::Text::new(xml_escape(domain))),
                ),
        )
}

extern crate color_lib;

use color_lib::color::{pick_text_color, sRGB, to_string};
use svg::node::element::{Circle, Group, LinearGradient, Rectangle, Stop, Text};
use svg::node::Node;

const BADGE_SIZE: f32 = 96.0;
const CENTER: f32 = BADGE_SIZE / 2.0;
const ROUNDED_RADIUS: f32 = 16.0;
// Inscribed so the rotated square stays inside the badge box.
const DIAMOND_SIDE: f32 = BADGE_SIZE / std::f32::consts::SQRT_2;
const DIAMOND_RADIUS: f32 = 12.0;

const INITIALS_SIZE: f32 = 40.0;
// The diamond has less horizontal room at the waist.
const DIAMOND_INITIALS_SIZE: f32 = 36.0;
// Fraction of the font size that drops the baseline below the vertical
// center, which is where a capital line looks centered.
const BASELINE_SHIFT: f32 = 0.35;

const FILL_ID: &str = "badge-fill";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Diamond,
    Rounded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub from: sRGB,
    pub to: sRGB,
    /// Direction in degrees; 0 runs left to right, 90 top to bottom.
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: sRGB,
    pub width: f32,
}

#[derive(Debug, Clone)]
pub struct Badge {
    pub shape: Shape,
    pub primary: sRGB,
    pub accent: Option<sRGB>,
    pub gradient: Option<Gradient>,
    pub outline: Option<Outline>,
    pub initials: String,
}

// Every color the initials can end up sitting on. A gradient contributes
// both ends of its ramp.
fn text_backgrounds(badge: &Badge) -> Vec<sRGB> {
    match (&badge.gradient, &badge.accent) {
        (Some(g), _) => vec![g.from, g.to],
        (None, Some(accent)) => vec![badge.primary, *accent],
        (None, None) => vec![badge.primary],
    }
}

fn with_outline<T: Node>(mut node: T, outline: &Option<Outline>) -> T {
    if let Some(o) = outline {
        node.assign("stroke", to_string(&o.color));
        node.assign("stroke-width", o.width);
    }
    node
}

// Gradient line endpoints sit symmetrically about the center of the unit
// square, so the ramp always crosses the middle of the shape.
fn make_gradient(gradient: &Gradient) -> LinearGradient {
    let (sin, cos) = gradient.angle.to_radians().sin_cos();
    LinearGradient::new()
        .set("id", FILL_ID)
        .set("x1", 0.5 - cos / 2.0)
        .set("y1", 0.5 - sin / 2.0)
        .set("x2", 0.5 + cos / 2.0)
        .set("y2", 0.5 + sin / 2.0)
        .add(
            Stop::new()
                .set("offset", "0%")
                .set("stop-color", to_string(&gradient.from)),
        )
        .add(
            Stop::new()
                .set("offset", "100%")
                .set("stop-color", to_string(&gradient.to)),
        )
}

pub fn make_badge(badge: &Badge) -> Group {
    let fill = match &badge.gradient {
        Some(_) => format!("url(#{})", FILL_ID),
        None => to_string(&badge.primary),
    };

    let mut group = Group::new();
    if let Some(gradient) = &badge.gradient {
        group = group.add(make_gradient(gradient));
    }

    group = match badge.shape {
        Shape::Circle => group.add(with_outline(
            Circle::new()
                .set("cx", CENTER)
                .set("cy", CENTER)
                .set("r", CENTER)
                .set("fill", fill),
            &badge.outline,
        )),
        Shape::Rounded => group.add(with_outline(
            Rectangle::new()
                .set("width", BADGE_SIZE)
                .set("height", BADGE_SIZE)
                .set("rx", ROUNDED_RADIUS)
                .set("ry", ROUNDED_RADIUS)
                .set("fill", fill),
            &badge.outline,
        )),
        Shape::Diamond => {
            let corner = CENTER - DIAMOND_SIDE / 2.0;
            group.add(with_outline(
                Rectangle::new()
                    .set("x", corner)
                    .set("y", corner)
                    .set("width", DIAMOND_SIDE)
                    .set("height", DIAMOND_SIDE)
                    .set("rx", DIAMOND_RADIUS)
                    .set("ry", DIAMOND_RADIUS)
                    .set("transform", format!("rotate(45 {} {})", CENTER, CENTER))
                    .set("fill", fill),
                &badge.outline,
            ))
        }
    };

    let font_size = match badge.shape {
        Shape::Diamond => DIAMOND_INITIALS_SIZE,
        _ => INITIALS_SIZE,
    };
    let text_color = pick_text_color(&text_backgrounds(badge));
    group.add(
        Text::new()
            .set("x", CENTER)
            .set("y", CENTER + font_size * BASELINE_SHIFT)
            .set("font-family", crate::FONT_STACK)
            .set("font-size", font_size)
            .set("font-weight", 700)
            .set("text-anchor", "middle")
            .set("fill", to_string(&text_color.srgb()))
            .add(svg::node::Text::new(crate::xml_escape(&badge.initials))),
    )
}

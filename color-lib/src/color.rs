use fast_srgb8::srgb8_to_f32;

#[allow(non_camel_case_types)]
pub type sRGB = [u8; 3];

pub const WHITE: sRGB = [0xFF, 0xFF, 0xFF];
// Near-black ink, dark enough to sit on any pale fill.
pub const INK: sRGB = [0x11, 0x18, 0x27];

// WCAG AA minimum contrast for normal-size text.
const MIN_TEXT_CONTRAST: f32 = 4.5;

pub fn as_index(c: &sRGB) -> usize {
    // RGB order. Might change later.
    let mut out: usize = c[2] as usize;
    out |= (c[1] as usize) << 8;
    out |= (c[0] as usize) << 16;
    out
}

pub fn to_string(c: &sRGB) -> String {
    format!("#{:06x}", as_index(c)).to_uppercase()
}

// Strict "#RRGGBB" only. Operator-facing code decides what a None means.
pub fn from_hex(s: &str) -> Option<sRGB> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some([r, g, b])
}

// Weights from https://www.w3.org/TR/WCAG21/#dfn-relative-luminance.
// Accessed 2026-08-21.
// srgb8_to_f32 is the piecewise sRGB transfer; on 8-bit inputs the WCAG
// 0.03928 threshold and the standard 0.04045 one select the same branch,
// so this matches the WCAG definition exactly.
pub fn relative_luminance(c: &sRGB) -> f32 {
    0.2126 * srgb8_to_f32(c[0]) + 0.7152 * srgb8_to_f32(c[1]) + 0.0722 * srgb8_to_f32(c[2])
}

// (L1 + 0.05) / (L2 + 0.05) with L1 >= L2, so the result is always >= 1
// regardless of argument order.
pub fn contrast_ratio(c1: &sRGB, c2: &sRGB) -> f32 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Dark,
}

impl TextColor {
    pub fn srgb(self) -> sRGB {
        match self {
            TextColor::White => WHITE,
            TextColor::Dark => INK,
        }
    }
}

// White only when it clears AA contrast against every supplied background,
// so text stays legible on the worst end of a two-color fill.
pub fn pick_text_color(backgrounds: &[sRGB]) -> TextColor {
    if backgrounds
        .iter()
        .all(|bg| contrast_ratio(&WHITE, bg) >= MIN_TEXT_CONTRAST)
    {
        TextColor::White
    } else {
        TextColor::Dark
    }
}

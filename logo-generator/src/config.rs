use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use color_lib::color::{from_hex, sRGB};
use logo_composer::{derive_initials, Badge, Gradient, Outline, Shape};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BrandList {
    brands: Vec<BrandEntry>,
}

// Raw operator input. Everything here gets checked in validate before any
// output is written.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BrandEntry {
    id: String,
    name: String,
    domain: String,
    primary: String,
    accent: Option<String>,
    badge_shape: Option<String>,
    initials: Option<String>,
    #[serde(default)]
    gradient: bool,
    gradient_from: Option<String>,
    gradient_to: Option<String>,
    gradient_angle: Option<f32>,
    outline_color: Option<String>,
    outline_width: Option<f32>,
}

/// A fully validated brand, ready to render.
#[derive(Debug, Clone)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub badge: Badge,
}

pub fn load_brands(path: &Path) -> Result<Vec<Brand>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_brands(&text).with_context(|| format!("in {}", path.display()))
}

pub fn parse_brands(text: &str) -> Result<Vec<Brand>> {
    let list: BrandList = serde_json::from_str(text).context("malformed brand list")?;
    let mut seen = HashSet::new();
    let mut brands = Vec::with_capacity(list.brands.len());
    for entry in list.brands {
        if !seen.insert(entry.id.clone()) {
            bail!("duplicate brand id {:?}", entry.id);
        }
        let id = entry.id.clone();
        brands.push(validate(entry).with_context(|| format!("brand {:?}", id))?);
    }
    Ok(brands)
}

fn validate(entry: BrandEntry) -> Result<Brand> {
    if entry.id.is_empty()
        || !entry
            .id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!("id {:?} is not usable as a directory name", entry.id);
    }
    if entry.name.trim().is_empty() {
        bail!("name must not be blank");
    }

    let primary = parse_color("primary", &entry.primary)?;
    let accent = match &entry.accent {
        Some(s) => Some(parse_color("accent", s)?),
        None => None,
    };
    let shape = parse_shape(entry.badge_shape.as_deref())?;

    let gradient = if entry.gradient {
        let from = match &entry.gradient_from {
            Some(s) => parse_color("gradient_from", s)?,
            None => primary,
        };
        let to = match &entry.gradient_to {
            Some(s) => parse_color("gradient_to", s)?,
            None => accent.unwrap_or(primary),
        };
        Some(Gradient {
            from,
            to,
            angle: entry.gradient_angle.unwrap_or(0.0),
        })
    } else {
        if entry.gradient_from.is_some()
            || entry.gradient_to.is_some()
            || entry.gradient_angle.is_some()
        {
            log::warn!(
                "brand {:?}: gradient fields are ignored without \"gradient\": true",
                entry.id
            );
        }
        None
    };

    let outline = match (&entry.outline_color, entry.outline_width) {
        (Some(color), Some(width)) => {
            if width <= 0.0 {
                bail!("outline_width must be positive, got {width}");
            }
            Some(Outline {
                color: parse_color("outline_color", color)?,
                width,
            })
        }
        (None, None) => None,
        _ => bail!("outline_color and outline_width must be given together"),
    };

    let initials = match &entry.initials {
        Some(s) => {
            let s = s.trim();
            if s.is_empty() {
                bail!("initials override must not be blank");
            }
            s.to_string()
        }
        None => derive_initials(&entry.name),
    };

    Ok(Brand {
        id: entry.id,
        name: entry.name,
        domain: entry.domain,
        badge: Badge {
            shape,
            primary,
            accent,
            gradient,
            outline,
            initials,
        },
    })
}

fn parse_color(field: &str, value: &str) -> Result<sRGB> {
    from_hex(value).with_context(|| format!("{field}: {value:?} is not a \"#RRGGBB\" color"))
}

fn parse_shape(value: Option<&str>) -> Result<Shape> {
    match value {
        None | Some("rounded") => Ok(Shape::Rounded),
        Some("circle") => Ok(Shape::Circle),
        Some("diamond") => Ok(Shape::Diamond),
        Some(other) => bail!("badge_shape {other:?} is not circle, diamond, or rounded"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(entry: &str) -> Result<Vec<Brand>> {
        parse_brands(&format!(r#"{{"brands": [{entry}]}}"#))
    }

    fn acme() -> String {
        r##"{"id": "acme", "name": "Acme Labs", "domain": "Cloud Tools",
            "primary": "#111827", "badge_shape": "circle"}"##
            .to_string()
    }

    #[test]
    fn test_minimal_entry() {
        let brands = one(&acme()).unwrap();
        assert_eq!(brands.len(), 1);
        let brand = &brands[0];
        assert_eq!(brand.id, "acme");
        assert_eq!(brand.badge.shape, Shape::Circle);
        assert_eq!(brand.badge.primary, [0x11, 0x18, 0x27]);
        assert_eq!(brand.badge.accent, None);
        assert_eq!(brand.badge.initials, "AL");
        assert!(brand.badge.gradient.is_none());
        assert!(brand.badge.outline.is_none());
    }

    #[test]
    fn test_shape_defaults_to_rounded() {
        let brands = one(
            r##"{"id": "x", "name": "X", "domain": "", "primary": "#111827"}"##,
        )
        .unwrap();
        assert_eq!(brands[0].badge.shape, Shape::Rounded);
    }

    #[test]
    fn test_initials_override_wins() {
        let brands = one(
            r##"{"id": "x", "name": "Acme Labs", "domain": "", "primary": "#111827",
                "initials": "ZZ"}"##,
        )
        .unwrap();
        assert_eq!(brands[0].badge.initials, "ZZ");
    }

    #[test]
    fn test_blank_initials_override_rejected() {
        let err = one(
            r##"{"id": "x", "name": "Acme Labs", "domain": "", "primary": "#111827",
                "initials": "  "}"##,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("initials"));
    }

    #[test]
    fn test_rejects_malformed_color() {
        for bad in ["112233", "#12G456", "#12345", ""] {
            let err = one(&format!(
                r#"{{"id": "x", "name": "X", "domain": "", "primary": "{bad}"}}"#
            ))
            .unwrap_err();
            assert!(format!("{err:#}").contains("primary"), "{bad}");
        }
    }

    #[test]
    fn test_rejects_unknown_shape() {
        let err = one(
            r##"{"id": "x", "name": "X", "domain": "", "primary": "#111827",
                "badge_shape": "hexagon"}"##,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("hexagon"));
    }

    #[test]
    fn test_rejects_unusable_id() {
        for bad in ["", "a/b", "..", "a b", "\u{e9}tude"] {
            let entry = format!(
                r##"{{"id": "{bad}", "name": "X", "domain": "", "primary": "#111827"}}"##
            );
            assert!(one(&entry).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = parse_brands(&format!(
            r#"{{"brands": [{0}, {0}]}}"#,
            acme()
        ))
        .unwrap_err();
        assert!(format!("{err:#}").contains("duplicate"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = one(
            r##"{"id": "x", "name": "X", "domain": "", "primary": "#111827",
                "badge_shap": "circle"}"##,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("badge_shap"));
    }

    #[test]
    fn test_rejects_missing_required_field() {
        assert!(one(r##"{"id": "x", "domain": "", "primary": "#111827"}"##).is_err());
        assert!(parse_brands(r#"{"labels": []}"#).is_err());
        assert!(parse_brands("not json").is_err());
    }

    #[test]
    fn test_rejects_blank_name() {
        assert!(one(r##"{"id": "x", "name": "  ", "domain": "", "primary": "#111827"}"##).is_err());
    }

    #[test]
    fn test_gradient_defaults_to_primary_and_accent() {
        let brands = one(
            r##"{"id": "x", "name": "X", "domain": "", "primary": "#111827",
                "accent": "#1D4ED8", "gradient": true}"##,
        )
        .unwrap();
        let gradient = brands[0].badge.gradient.unwrap();
        assert_eq!(gradient.from, [0x11, 0x18, 0x27]);
        assert_eq!(gradient.to, [0x1D, 0x4E, 0xD8]);
        assert_eq!(gradient.angle, 0.0);
    }

    #[test]
    fn test_gradient_without_accent_falls_back_to_primary() {
        let brands = one(
            r##"{"id": "x", "name": "X", "domain": "", "primary": "#111827",
                "gradient": true}"##,
        )
        .unwrap();
        let gradient = brands[0].badge.gradient.unwrap();
        assert_eq!(gradient.from, gradient.to);
    }

    #[test]
    fn test_explicit_gradient_endpoints() {
        let brands = one(
            r##"{"id": "x", "name": "X", "domain": "", "primary": "#111827",
                "gradient": true, "gradient_from": "#FF0000", "gradient_to": "#0000FF",
                "gradient_angle": 45.0}"##,
        )
        .unwrap();
        let gradient = brands[0].badge.gradient.unwrap();
        assert_eq!(gradient.from, [0xFF, 0x00, 0x00]);
        assert_eq!(gradient.to, [0x00, 0x00, 0xFF]);
        assert_eq!(gradient.angle, 45.0);
    }

    #[test]
    fn test_gradient_fields_ignored_without_flag() {
        let brands = one(
            r##"{"id": "x", "name": "X", "domain": "", "primary": "#111827",
                "gradient_from": "#FF0000"}"##,
        )
        .unwrap();
        assert!(brands[0].badge.gradient.is_none());
    }

    #[test]
    fn test_outline_requires_both_fields() {
        let base = r##""id": "x", "name": "X", "domain": "", "primary": "#111827""##;
        assert!(one(&format!(r##"{{{base}, "outline_color": "#000000"}}"##)).is_err());
        assert!(one(&format!(r#"{{{base}, "outline_width": 2.0}}"#)).is_err());

        let brands = one(&format!(
            r##"{{{base}, "outline_color": "#000000", "outline_width": 2.0}}"##
        ))
        .unwrap();
        let outline = brands[0].badge.outline.unwrap();
        assert_eq!(outline.color, [0x00, 0x00, 0x00]);
        assert_eq!(outline.width, 2.0);
    }

    #[test]
    fn test_outline_width_must_be_positive() {
        let base = r##""id": "x", "name": "X", "domain": "", "primary": "#111827""##;
        for width in ["0.0", "-1.0"] {
            let entry = format!(
                r##"{{{base}, "outline_color": "#000000", "outline_width": {width}}}"##
            );
            assert!(one(&entry).is_err(), "{width}");
        }
    }
}

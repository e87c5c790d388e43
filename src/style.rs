// SPDX-License-Identifier: GPL-3.0-or-later

use crate::colors;
use crate::themes::SurfaceConfig;
use crate::Res;

/// Colors resolved for one themed surface of an identifier.
#[derive(Debug, Clone)]
pub struct SurfaceStyle {
    pub key: String,
    pub fill: String,
    pub outline: Option<String>,
}

/// Resolve a surface config against an identifier's tint: a translucent
/// `rgba(...)` fill below alpha 1, the solid hex otherwise, and the solid
/// hex as outline when the surface draws one.
pub fn resolve(id: &str, cfg: &SurfaceConfig) -> Res<SurfaceStyle> {
    let hex = colors::from_identifier(id);

    let fill = if cfg.fill_alpha < 1.0 {
        colors::hex_to_rgba(&hex, cfg.fill_alpha)?
    } else {
        hex.clone()
    };

    Ok(SurfaceStyle {
        key: cfg.key.clone(),
        fill,
        outline: cfg.outline.then_some(hex),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{get_surface_list, Theme};

    const TOPIC_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_resolve_card() {
        let cfg = SurfaceConfig {
            key: String::from("card"),
            fill_alpha: 0.5,
            outline: true,
        };

        let style = resolve(TOPIC_ID, &cfg).unwrap();
        assert_eq!(style.fill, "rgba(113, 124, 141, 0.5)");
        assert_eq!(style.outline.as_deref(), Some("#717c8d"));
    }

    #[test]
    fn test_resolve_solid() {
        let cfg = SurfaceConfig {
            key: String::from("avatar"),
            fill_alpha: 1.0,
            outline: false,
        };

        let style = resolve(TOPIC_ID, &cfg).unwrap();
        assert_eq!(style.fill, "#717c8d");
        assert_eq!(style.outline, None);
    }

    #[test]
    fn test_resolve_default_theme() {
        for cfg in get_surface_list(&Theme::default()) {
            let style = resolve("topic", &cfg).unwrap();
            assert!(style.fill.starts_with('#') || style.fill.starts_with("rgba("));
        }
    }
}

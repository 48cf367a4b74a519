/// One particle appearance with its pick weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub glyph: &'static str,
    pub weight: f64,
}

/// Falling particles for a festival, empty when it has none.
pub fn falling_glyphs(festival: Festival) -> &'static [Glyph] {
    match festival {
        Festival::Pongal => &[
            Glyph { glyph: "🌾", weight: 0.5 },
            Glyph { glyph: "🌺", weight: 0.3 },
            Glyph { glyph: "🍃", weight: 0.2 },
        ],
        Festival::Diwali => &[
            Glyph { glyph: "🪔", weight: 0.4 },
            Glyph { glyph: "✨", weight: 0.4 },
            Glyph { glyph: "🎇", weight: 0.2 },
        ],
        Festival::Christmas => &[
            Glyph { glyph: "❄", weight: 0.6 },
            Glyph { glyph: "❅", weight: 0.3 },
            Glyph { glyph: "🎁", weight: 0.1 },
        ],
        Festival::NewYear => &[
            Glyph { glyph: "🎊", weight: 0.5 },
            Glyph { glyph: "🎉", weight: 0.5 },
        ],
        _ => &[],
    }
}

/// Rockets are a diwali-only extra on top of the falling particles.
pub fn rocket_glyphs(festival: Festival) -> &'static [Glyph] {
    match festival {
        Festival::Diwali => &[
            Glyph { glyph: "🚀", weight: 0.3 },
            Glyph { glyph: "🎆", weight: 0.7 },
        ],
        _ => &[],
    }
}

pub fn has_decorations(festival: Festival) -> bool {
    !falling_glyphs(festival).is_empty() || !rocket_glyphs(festival).is_empty()
}

/// Weighted pick, `roll` in `0..1`. Weights are treated as relative.
pub fn pick(glyphs: &'static [Glyph], roll: f64) -> Option<&'static Glyph> {
    let total: f64 = glyphs.iter().map(|g| g.weight).sum();
    if total <= 0.0 {
        return None;
    }

    let mut cursor = roll.clamp(0.0, 1.0) * total;
    for glyph in glyphs {
        if cursor < glyph.weight {
            return Some(glyph);
        }
        cursor -= glyph.weight;
    }
    glyphs.last()
}

use interfacing::Festival;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_diwali_has_rockets() {
        use interfacing::SUPPORTED_FESTIVALS;
        for &festival in SUPPORTED_FESTIVALS {
            assert_eq!(
                !rocket_glyphs(festival).is_empty(),
                festival == Festival::Diwali
            );
        }
    }

    #[test]
    fn plain_look_has_no_decorations() {
        assert!(!has_decorations(Festival::Default));
        assert!(has_decorations(Festival::Christmas));
        assert!(has_decorations(Festival::Diwali));
    }

    #[test]
    fn pick_covers_the_whole_roll_range() {
        let glyphs = falling_glyphs(Festival::Christmas);
        assert_eq!(pick(glyphs, 0.0), Some(&glyphs[0]));
        assert_eq!(pick(glyphs, 0.9999), Some(&glyphs[glyphs.len() - 1]));
        assert!(pick(glyphs, 0.5).is_some());
    }

    #[test]
    fn pick_on_an_empty_table_yields_nothing() {
        assert_eq!(pick(falling_glyphs(Festival::Default), 0.5), None);
    }
}

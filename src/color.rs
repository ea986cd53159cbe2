use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Sentiment colour: red (0) → green (1)
// ---------------------------------------------------------------------------

/// Colour for a sentiment score: `r = 1 - s`, `g = s`, no blue.
/// Scores outside `[0, 1]` are clamped.
pub fn sentiment_color(score: f64) -> Color32 {
    let s = score.clamp(0.0, 1.0) as f32;
    to_color32(Srgb::new(1.0 - s, s, 0.0))
}

/// Same as [`sentiment_color`] with a reduced alpha, for fills behind text.
pub fn sentiment_fill(score: f64, alpha: u8) -> Color32 {
    let c = sentiment_color(score);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
}

// ---------------------------------------------------------------------------
// Avatar colours: stable hue per handle
// ---------------------------------------------------------------------------

/// Picks a hue from the handle's hash so an author keeps the same badge
/// colour in the card grid and the full listing.
pub fn avatar_color(handle: &str) -> Color32 {
    let mut hasher = DefaultHasher::new();
    handle.hash(&mut hasher);
    let hue = (hasher.finish() % 360) as f32;
    let rgb: Srgb = Hsl::new(hue, 0.55, 0.45).into_color();
    to_color32(rgb)
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_pure_red_and_green() {
        assert_eq!(sentiment_color(0.0), Color32::from_rgb(255, 0, 0));
        assert_eq!(sentiment_color(1.0), Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(sentiment_color(2.0), sentiment_color(1.0));
        assert_eq!(sentiment_color(-1.0), sentiment_color(0.0));
    }

    #[test]
    fn midpoint_mixes_evenly() {
        let c = sentiment_color(0.5);
        assert_eq!(c.r(), c.g());
        assert_eq!(c.b(), 0);
    }

    #[test]
    fn avatar_color_is_stable() {
        assert_eq!(avatar_color("@rag_pil"), avatar_color("@rag_pil"));
    }
}

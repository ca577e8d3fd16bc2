use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::histogram::Bin;

// ---------------------------------------------------------------------------
// Bar shading
// ---------------------------------------------------------------------------

const BAR_HUE: f32 = 210.0;

/// Shade for a bar of height `count`; taller bars are darker.
pub fn bar_color(count: usize, max_count: usize) -> Color32 {
    let fraction = if max_count == 0 {
        0.0
    } else {
        count as f32 / max_count as f32
    };
    let lightness = 0.75 - 0.4 * fraction;
    let hsl = Hsl::new(BAR_HUE, 0.65, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// One colour per bin, scaled to the tallest bin.
pub fn bar_colors(bins: &[Bin]) -> Vec<Color32> {
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    bins.iter().map(|b| bar_color(b.count, max_count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(c: Color32) -> u32 {
        c.r() as u32 + c.g() as u32 + c.b() as u32
    }

    #[test]
    fn taller_bars_are_darker() {
        let low = bar_color(1, 10);
        let high = bar_color(10, 10);
        assert!(brightness(high) < brightness(low));
    }

    #[test]
    fn zero_max_does_not_divide() {
        assert_eq!(bar_color(0, 0), bar_color(0, 5));
    }

    #[test]
    fn one_colour_per_bin() {
        let bins = [
            Bin { lower: 0, upper: 1, count: 2 },
            Bin { lower: 1, upper: 2, count: 4 },
        ];
        assert_eq!(bar_colors(&bins).len(), 2);
    }
}

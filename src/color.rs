use serde::{Deserialize, Serialize};

/// A color struct that holds the red, green, and blue values of a color.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

static BACKGROUND: Color = Color {
    red: 24,
    green: 24,
    blue: 24,
};

// golden-angle hue steps keep consecutive deposits visually distinct
const GOLDEN_ANGLE: f64 = 137.507_764;

impl Default for Color {
    fn default() -> Self {
        Self::background()
    }
}

impl Color {
    pub fn background() -> Self {
        BACKGROUND
    }

    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Color of the `index`-th labelled deposit.
    pub fn palette(index: usize) -> Self {
        let hue = (index as f64 * GOLDEN_ANGLE) % 360.;
        Self::from_hsv(hue, 0.65, 0.95)
    }

    /// `hue` in degrees, `saturation` and `value` in `0.0..=1.0`.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let c = value * saturation;
        let h = (hue.rem_euclid(360.)) / 60.;
        let x = c * (1. - (h % 2. - 1.).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.),
            1 => (x, c, 0.),
            2 => (0., c, x),
            3 => (0., x, c),
            4 => (x, 0., c),
            _ => (c, 0., x),
        };
        let m = value - c;
        let to_u8 = |v: f64| ((v + m) * (u8::MAX as f64)).round() as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    pub fn r(&self) -> u8 {
        self.red
    }

    pub fn g(&self) -> u8 {
        self.green
    }

    pub fn b(&self) -> u8 {
        self.blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(Color::from_hsv(0., 1., 1.), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsv(120., 1., 1.), Color::new(0, 255, 0));
        assert_eq!(Color::from_hsv(240., 1., 1.), Color::new(0, 0, 255));
        assert_eq!(Color::from_hsv(360., 1., 1.), Color::new(255, 0, 0));
    }

    #[test]
    fn palette_never_matches_background() {
        for i in 0..256 {
            assert_ne!(Color::palette(i), Color::background());
        }
        assert_ne!(Color::palette(0), Color::palette(1));
    }
}

use std::fmt;

// The fixed set of categories a pixel can classify into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorLabel {
    Black,
    White,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    DarkGreen,
    Green,
    Blue,
    DarkBlue,
    Purple,
    DarkPink,
    Pink,
    // Pre-classification placeholder; classify() never produces it.
    #[default]
    Undefined,
}

impl ColorLabel {
    // Canonical uppercase name used for target comparison and responses.
    pub const fn name(self) -> &'static str {
        match self {
            ColorLabel::Black => "BLACK",
            ColorLabel::White => "WHITE",
            ColorLabel::Gray => "GRAY",
            ColorLabel::Brown => "BROWN",
            ColorLabel::Red => "RED",
            ColorLabel::Orange => "ORANGE",
            ColorLabel::Yellow => "YELLOW",
            ColorLabel::DarkGreen => "DARK_GREEN",
            ColorLabel::Green => "GREEN",
            ColorLabel::Blue => "BLUE",
            ColorLabel::DarkBlue => "DARK_BLUE",
            ColorLabel::Purple => "PURPLE",
            ColorLabel::DarkPink => "DARK_PINK",
            ColorLabel::Pink => "PINK",
            ColorLabel::Undefined => "UNDEFINED",
        }
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Classifies a single HSV pixel into a color category.
//
// Hue follows the 8-bit convention (0..=179, half degrees); saturation and
// value span 0..=255. The branches are ordered: the first condition that
// holds wins, and each hue band assumes every earlier branch already
// failed. Reordering them changes the result.
pub fn classify(h: u8, s: u8, v: u8) -> ColorLabel {
    if v < 40 {
        ColorLabel::Black
    } else if s < 30 && v > 180 {
        ColorLabel::White
    } else if s < 60 && v > 40 && v < 180 {
        ColorLabel::Gray
    } else if h > 5 && h < 22 && s > 100 && v < 150 {
        ColorLabel::Brown
    } else if h < 5 || h >= 170 {
        ColorLabel::Red
    } else if h < 22 {
        ColorLabel::Orange
    } else if h < 33 {
        ColorLabel::Yellow
    } else if h < 78 && v < 100 {
        ColorLabel::DarkGreen
    } else if h < 78 {
        ColorLabel::Green
    } else if h < 102 {
        ColorLabel::Blue
    } else if h < 131 {
        ColorLabel::DarkBlue
    } else if h < 145 {
        ColorLabel::Purple
    } else if h < 168 && v < 160 {
        ColorLabel::DarkPink
    } else if h < 168 {
        ColorLabel::Pink
    } else {
        ColorLabel::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_value_is_black_regardless_of_hue_and_saturation() {
        for h in [0u8, 45, 90, 179] {
            for s in [0u8, 128, 255] {
                assert_eq!(classify(h, s, 0), ColorLabel::Black);
                assert_eq!(classify(h, s, 39), ColorLabel::Black);
            }
        }
    }

    #[test]
    fn never_returns_undefined() {
        for h in 0..=179u8 {
            for s in (0..=255u8).step_by(5) {
                for v in (0..=255u8).step_by(5) {
                    assert_ne!(
                        classify(h, s, v),
                        ColorLabel::Undefined,
                        "h={h} s={s} v={v}"
                    );
                }
            }
        }
    }

    #[test]
    fn orange_yellow_boundary_is_exact() {
        assert_eq!(classify(21, 200, 200), ColorLabel::Orange);
        assert_eq!(classify(22, 200, 200), ColorLabel::Yellow);
        assert_eq!(classify(32, 200, 200), ColorLabel::Yellow);
        assert_eq!(classify(33, 200, 200), ColorLabel::Green);
    }

    #[test]
    fn red_wraps_at_both_ends() {
        assert_eq!(classify(0, 255, 255), ColorLabel::Red);
        assert_eq!(classify(4, 255, 255), ColorLabel::Red);
        assert_eq!(classify(5, 255, 255), ColorLabel::Orange);
        assert_eq!(classify(169, 200, 200), ColorLabel::Red);
        assert_eq!(classify(170, 255, 255), ColorLabel::Red);
        assert_eq!(classify(179, 255, 255), ColorLabel::Red);
    }

    #[test]
    fn brown_takes_precedence_over_orange_band() {
        assert_eq!(classify(10, 150, 100), ColorLabel::Brown);
        // Same hue band falls through to orange once the brown
        // saturation/value conditions no longer hold.
        assert_eq!(classify(10, 150, 150), ColorLabel::Orange);
        assert_eq!(classify(10, 100, 100), ColorLabel::Orange);
    }

    #[test]
    fn green_band_splits_on_value() {
        assert_eq!(classify(60, 200, 99), ColorLabel::DarkGreen);
        assert_eq!(classify(60, 200, 100), ColorLabel::Green);
    }

    #[test]
    fn pink_band_splits_on_value() {
        assert_eq!(classify(150, 200, 159), ColorLabel::DarkPink);
        assert_eq!(classify(150, 200, 160), ColorLabel::Pink);
    }

    #[test]
    fn achromatic_bands() {
        assert_eq!(classify(90, 10, 200), ColorLabel::White);
        assert_eq!(classify(90, 10, 100), ColorLabel::Gray);
        assert_eq!(classify(90, 59, 179), ColorLabel::Gray);
    }

    #[test]
    fn classification_is_pure() {
        for h in (0..=179u8).step_by(7) {
            for s in (0..=255u8).step_by(31) {
                for v in (0..=255u8).step_by(31) {
                    assert_eq!(classify(h, s, v), classify(h, s, v));
                }
            }
        }
    }
}

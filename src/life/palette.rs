/// Color drawn for dead cells.
pub const BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// Live-cell color for the flat rendering variant.
pub const FOREGROUND: [u8; 4] = [0x00, 0xc8, 0x00, 0xff];

/// Diverging ramp indexed by cell age. Cells older than the ramp keep the
/// last color.
pub const AGE_RAMP: [[u8; 4]; 11] = [
    [0x9e, 0x01, 0x42, 0xff],
    [0xd5, 0x3e, 0x4f, 0xff],
    [0xf4, 0x6d, 0x43, 0xff],
    [0xfd, 0xae, 0x61, 0xff],
    [0xfe, 0xe0, 0x8b, 0xff],
    [0xff, 0xff, 0xbf, 0xff],
    [0xe6, 0xf5, 0x98, 0xff],
    [0xab, 0xdd, 0xa4, 0xff],
    [0x66, 0xc2, 0xa5, 0xff],
    [0x32, 0x88, 0xbd, 0xff],
    [0x5e, 0x4f, 0xa2, 0xff],
];

/// How live cells are colored. Dead cells always take [`BACKGROUND`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    /// Every live cell in a single color.
    Flat([u8; 4]),
    /// Live cells colored by age, saturating at the ramp's last entry.
    AgeGradient(&'static [[u8; 4]]),
}

impl ColorScheme {
    pub fn flat() -> Self {
        Self::Flat(FOREGROUND)
    }

    pub fn age_gradient() -> Self {
        Self::AgeGradient(&AGE_RAMP)
    }

    /// Map a cell age to its RGBA color.
    pub fn color(&self, age: i32) -> [u8; 4] {
        if age < 0 {
            return BACKGROUND;
        }

        match self {
            Self::Flat(color) => *color,
            Self::AgeGradient(ramp) => ramp
                .get(age as usize)
                .or_else(|| ramp.last())
                .copied()
                .unwrap_or(BACKGROUND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_cells_take_background() {
        assert_eq!(ColorScheme::flat().color(-1), BACKGROUND);
        assert_eq!(ColorScheme::age_gradient().color(-1), BACKGROUND);
    }

    #[test]
    fn test_flat_ignores_age() {
        let scheme = ColorScheme::flat();
        assert_eq!(scheme.color(0), FOREGROUND);
        assert_eq!(scheme.color(7), FOREGROUND);
        assert_eq!(scheme.color(i32::MAX), FOREGROUND);
    }

    #[test]
    fn test_gradient_indexes_by_age() {
        let scheme = ColorScheme::age_gradient();
        for (age, expected) in AGE_RAMP.iter().enumerate() {
            assert_eq!(scheme.color(age as i32), *expected);
        }
    }

    #[test]
    fn test_gradient_saturates_past_ramp() {
        let scheme = ColorScheme::age_gradient();
        let last = AGE_RAMP[AGE_RAMP.len() - 1];
        assert_eq!(scheme.color(AGE_RAMP.len() as i32 - 1), last);
        assert_eq!(scheme.color(AGE_RAMP.len() as i32), last);
        assert_eq!(scheme.color(1000), last);
    }

    #[test]
    fn test_ramp_entries_distinct() {
        for (i, a) in AGE_RAMP.iter().enumerate() {
            for b in AGE_RAMP.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_empty_ramp_falls_back_to_background() {
        let scheme = ColorScheme::AgeGradient(&[]);
        assert_eq!(scheme.color(0), BACKGROUND);
    }
}

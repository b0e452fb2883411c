use crate::category::HexColor;
use crate::selection::Fill;
use palette::{Srgba, WithAlpha};

pub const STRESSED_ALPHA: f64 = 0.5;

impl Fill {
    /// Full base color for the typical range, half-transparent base for the stressed range,
    /// `neutral` for rings outside both.
    pub fn color(&self, base: HexColor, neutral: Srgba<f64>) -> Srgba<f64> {
        let base = base.rgb().into_format::<f64>();
        match self {
            Self::Typical => base.with_alpha(1.0),
            Self::Stressed => base.with_alpha(STRESSED_ALPHA),
            Self::Empty => neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fill_colors() {
        let base = HexColor::new(255, 0, 51);
        let neutral = Srgba::new(0.9, 0.9, 0.9, 1.0);

        let colors: Vec<_> = Fill::iter().map(|f| f.color(base, neutral)).collect();

        let (r, g, b, a) = colors[0].into_components();
        assert_eq!((r, g, a), (1.0, 0.0, 1.0));
        assert!((b - 0.2).abs() < 1e-9);

        assert_eq!(colors[1].alpha, STRESSED_ALPHA);
        assert_eq!(colors[1].color, colors[0].color);

        assert_eq!(colors[2], neutral);
    }
}

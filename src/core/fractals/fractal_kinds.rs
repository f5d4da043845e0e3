use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::{julia_escape_time, mandelbrot_escape_time};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    Julia,
    #[default]
    Mandelbrot,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("fractal '{}' not found, expected julia or mandelbrot", s))
    }
}

/// Which quadratic recurrence a field is computed with.
///
/// Julia fixes `c` and seeds the orbit with the pixel; Mandelbrot seeds with
/// zero and uses the pixel as `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalModel {
    Julia { c: Complex },
    Mandelbrot,
}

impl FractalModel {
    #[must_use]
    pub const fn kind(&self) -> FractalKind {
        match self {
            Self::Julia { .. } => FractalKind::Julia,
            Self::Mandelbrot => FractalKind::Mandelbrot,
        }
    }

    #[must_use]
    pub const fn constant(&self) -> Option<Complex> {
        match self {
            Self::Julia { c } => Some(*c),
            Self::Mandelbrot => None,
        }
    }

    /// Escape time of the pixel mapped to `p`.
    #[inline]
    #[must_use]
    pub fn escape_time(&self, p: Complex, depth: u32) -> u32 {
        match self {
            Self::Julia { c } => julia_escape_time(p, *c, depth),
            Self::Mandelbrot => mandelbrot_escape_time(p, depth),
        }
    }
}

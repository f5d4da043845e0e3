use crate::core::data::complex::Complex;
use std::fmt;

/// A pair of reals. Holds a pixel position before mapping and a point on the
/// complex plane after it (x = real part, y = imaginary part).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// `XxY`, the form the command line reads back.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl From<Point> for Complex {
    fn from(point: Point) -> Self {
        Complex {
            real: point.x,
            imag: point.y,
        }
    }
}

impl From<Complex> for Point {
    fn from(c: Complex) -> Self {
        Point {
            x: c.real,
            y: c.imag,
        }
    }
}

use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

pub const ESCAPE_RADIUS: f64 = 2.0;

/// Counts how many applications of `f` it takes for the orbit of `z0` to
/// leave the disc of radius `radius`, capped at `depth`.
///
/// The seed itself is checked first, so a seed already outside the disc
/// scores 0.
pub fn escape_time<F>(z0: Complex, f: F, depth: u32, radius: f64) -> u32
where
    F: Fn(Complex) -> Complex,
{
    let radius_squared = radius * radius;

    let iterations = (0..depth).try_fold(z0, |z, iteration| {
        if z.magnitude_squared() < radius_squared {
            ControlFlow::Continue(f(z))
        } else {
            ControlFlow::Break(iteration)
        }
    });

    match iterations {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => depth,
    }
}

/// `z ← z² + c`
#[inline]
pub fn quadratic(c: Complex) -> impl Fn(Complex) -> Complex {
    move |z| z * z + c
}

#[inline]
pub fn mandelbrot_escape_time(p: Complex, depth: u32) -> u32 {
    escape_time(Complex::ZERO, quadratic(p), depth, ESCAPE_RADIUS)
}

#[inline]
pub fn julia_escape_time(p: Complex, c: Complex, depth: u32) -> u32 {
    escape_time(p, quadratic(c), depth, ESCAPE_RADIUS)
}

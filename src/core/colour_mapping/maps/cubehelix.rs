use std::f64::consts::PI;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

// D. A. Green (2011), "A colour scheme for the display of astronomical
// intensity images". Parameters match the usual cubehelix default.
const START: f64 = 0.5;
const ROTATIONS: f64 = -1.5;
const HUE: f64 = 1.0;
const GAMMA: f64 = 1.0;

/// Brightness rises monotonically with the escape time while the hue
/// rotates, so the palette also reads correctly in greyscale.
#[derive(Debug)]
pub struct Cubehelix {
    depth: u32,
}

impl Cubehelix {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

fn channel(lambda: f64, p0: f64, p1: f64) -> u8 {
    let lg = lambda.powf(GAMMA);
    let amplitude = HUE * lg * (1.0 - lg) / 2.0;
    let phi = 2.0 * PI * (START / 3.0 + ROTATIONS * lambda);
    let value = lg + amplitude * (p0 * phi.cos() + p1 * phi.sin());

    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl ColourMap for Cubehelix {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.depth {
            return Err(ColourMapError::IterationsExceedDepth {
                iterations,
                depth: self.depth,
            });
        }

        let lambda = if self.depth == 0 {
            0.0
        } else {
            iterations as f64 / self.depth as f64
        };

        Ok(Colour {
            r: channel(lambda, -0.14861, 1.78277),
            g: channel(lambda, -0.29227, -0.90649),
            b: channel(lambda, 1.97294, 0.0),
        })
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Cubehelix
    }
}

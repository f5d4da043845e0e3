use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// Hue follows the escape time, points that never escape are black.
///
/// On the 0..=255 HSV scale: `hue = 255 * m / depth`, `saturation = 255`,
/// `value = 255` if `m < depth` else `0`.
#[derive(Debug)]
pub struct HsvEscape {
    depth: u32,
}

impl HsvEscape {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

fn hsv_to_rgb(hue: u8, saturation: u8, value: u8) -> Colour {
    let h = hue as f64 / 255.0 * 6.0;
    let s = saturation as f64 / 255.0;
    let v = value as f64 / 255.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Colour {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

impl ColourMap for HsvEscape {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.depth {
            return Err(ColourMapError::IterationsExceedDepth {
                iterations,
                depth: self.depth,
            });
        }

        if iterations == self.depth {
            return Ok(Colour::BLACK);
        }

        let hue = (255 * u64::from(iterations) / u64::from(self.depth)) as u8;

        Ok(hsv_to_rgb(hue, 255, 255))
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Hsv
    }
}

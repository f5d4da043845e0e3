use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideCanvas { col: u32, row: u32, size: CanvasSize },
    DegenerateCanvas { size: CanvasSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideCanvas { col, row, size } => {
                write!(
                    f,
                    "pixel (col: {}, row: {}) is outside the {} canvas",
                    col, row, size
                )
            }
            Self::DegenerateCanvas { size } => {
                write!(
                    f,
                    "cannot map pixels of a {} canvas: its longest side must be at least 2",
                    size
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to the complex plane.
///
/// The canvas is centred inside a square frame of side `max(width, height)` so
/// that zoom scales both axes equally. At zoom 1 the frame spans `[-1, 1]` on
/// each axis around `center`. Rows grow downwards, the imaginary axis grows
/// upwards.
///
/// The operation order is fixed: changing it changes the low bits of the
/// result and with them the reference images.
pub fn pixel_to_complex_coords(
    col: u32,
    row: u32,
    size: CanvasSize,
    zoom: f64,
    center: Point,
) -> Result<Point, PixelToComplexCoordsError> {
    if col >= size.width || row >= size.height {
        return Err(PixelToComplexCoordsError::PointOutsideCanvas { col, row, size });
    }

    let side = size.side();

    if side < 2 {
        return Err(PixelToComplexCoordsError::DegenerateCanvas { size });
    }

    let side_minus_one = (side - 1) as f64;
    let delta_x = (side - size.width) as f64 / 2.0;
    let delta_y = (side - size.height) as f64 / 2.0;

    let y = (2.0 * (size.height as f64 - row as f64 + delta_y) / side_minus_one - 1.0) / zoom
        + center.y;
    let x = (2.0 * (col as f64 + delta_x) / side_minus_one - 1.0) / zoom + center.x;

    Ok(Point { x, y })
}

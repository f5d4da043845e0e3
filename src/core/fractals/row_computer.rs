use crate::core::actions::generate_field::ports::row_computer::RowComputer;
use crate::core::fractals::generation_config::GenerationConfig;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Escape times for every column of `row`, left to right.
pub fn compute_row(row: u32, config: &GenerationConfig) -> Result<Vec<u32>, PixelToComplexCoordsError> {
    let size = config.size();
    let model = config.model();
    let depth = config.depth();

    (0..size.width)
        .map(|col| {
            let p = pixel_to_complex_coords(col, row, size, config.zoom(), config.center())?;
            Ok(model.escape_time(p.into(), depth))
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct EscapeTimeRows<'a> {
    config: &'a GenerationConfig,
}

impl<'a> EscapeTimeRows<'a> {
    #[must_use]
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }
}

impl RowComputer for EscapeTimeRows<'_> {
    type Failure = PixelToComplexCoordsError;

    fn width(&self) -> u32 {
        self.config.size().width
    }

    fn rows(&self) -> u32 {
        self.config.size().height
    }

    fn compute_row(&self, row: u32) -> Result<Vec<u32>, Self::Failure> {
        compute_row(row, self.config)
    }
}

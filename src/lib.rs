mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::args::{CliArgs, CliArgsError};
pub use crate::controllers::cli::cli_controller::CliController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_field::errors::{ComputationFailure, GenerateFieldError};
pub use crate::core::actions::generate_field::generate_field::{
    generate_field, generate_field_with_pool, generate_fractal_field, generate_rows,
};
pub use crate::core::actions::generate_field::ports::row_computer::RowComputer;
pub use crate::core::actions::generate_field::worker_pool::{WorkerPool, available_threads};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::colour_mapping::errors::ColourMapError;
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::ColourMapKind;
pub use crate::core::data::canvas_size::CanvasSize;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::field::{Field, FieldError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::errors::ConfigurationError;
pub use crate::core::fractals::escape_time::{ESCAPE_RADIUS, escape_time};
pub use crate::core::fractals::fractal_kinds::{FractalKind, FractalModel};
pub use crate::core::fractals::generation_config::GenerationConfig;
pub use crate::core::fractals::row_computer::{EscapeTimeRows, compute_row};
pub use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};
pub use crate::presenters::file::image_file::ImageFilePresenter;
pub use crate::presenters::file::output_format::{OutputFormat, UnsupportedOutputFormat};
pub use crate::presenters::file::ppm::write_ppm;

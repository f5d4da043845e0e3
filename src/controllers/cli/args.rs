use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::controllers::cli::parse::{parse_center, parse_complex, parse_output, parse_size};
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::errors::ConfigurationError;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::generation_config::{
    DEFAULT_CENTER, DEFAULT_DEPTH, DEFAULT_SIZE, DEFAULT_ZOOM, GenerationConfig,
};

const EXAMPLES: &str = "Examples:
  escape_field julia -0.7 +0.27015 j --size=500x300 --depth=1024 -o julia.png
  escape_field mandelbrot -s 500x500 -d 80 -z 0.8 -c -0.75x0 -m hsv -o m.ppm";

/// Renders Julia and Mandelbrot escape-time fractals to image files.
#[derive(Parser, Debug, Clone)]
#[command(name = "escape_field", version, after_help = EXAMPLES)]
pub struct CliArgs {
    /// Fractal model: julia or mandelbrot
    pub model: FractalKind,

    /// Julia constant, e.g. `-0.7 +0.27015 j` or `(-0.7+0.27015i)`
    #[arg(allow_negative_numbers = true)]
    pub c: Vec<String>,

    /// Canvas size in pixels, WIDTHxHEIGHT
    #[arg(short, long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    pub size: CanvasSize,

    /// Maximum number of iterations per pixel
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u32,

    /// Zoom factor, greater than zero
    #[arg(short, long, default_value_t = DEFAULT_ZOOM, allow_negative_numbers = true)]
    pub zoom: f64,

    /// Center of the view on the complex plane, XxY
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_CENTER,
        value_parser = parse_center,
        allow_hyphen_values = true
    )]
    pub center: Point,

    /// Colour map: cubehelix or hsv
    #[arg(
        short = 'm',
        long = "colour-map",
        alias = "cmap",
        default_value = ColourMapKind::default().cli_name()
    )]
    pub colour_map: ColourMapKind,

    /// Worker threads [default: one per hardware thread]
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,

    /// Output image; the extension picks the format (.ppm, .png, .bmp, .jpg, .tiff)
    #[arg(short, long, value_parser = parse_output)]
    pub output: PathBuf,
}

#[derive(Debug, PartialEq)]
pub enum CliArgsError {
    Constant(String),
    Configuration(ConfigurationError),
}

impl std::fmt::Display for CliArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(message) => f.write_str(message),
            Self::Configuration(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliArgsError {}

impl CliArgs {
    /// The joined `c` tokens, if any were given.
    pub fn constant(&self) -> Result<Option<Complex>, CliArgsError> {
        if self.c.is_empty() {
            return Ok(None);
        }

        parse_complex(&self.c.concat())
            .map(Some)
            .map_err(CliArgsError::Constant)
    }

    pub fn generation_config(&self) -> Result<GenerationConfig, CliArgsError> {
        GenerationConfig::new(
            self.model,
            self.constant()?,
            self.size,
            self.depth,
            self.zoom,
            self.center,
        )
        .map_err(CliArgsError::Configuration)
    }
}

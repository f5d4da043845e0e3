use crate::core::data::canvas_size::CanvasSize;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    MissingJuliaConstant,
    UnexpectedMandelbrotConstant,
    InvalidSize { width: u32, height: u32 },
    DegenerateCanvas { size: CanvasSize },
    InvalidZoom(f64),
    NonFiniteCenter { x: f64, y: f64 },
    NonFiniteConstant { real: f64, imag: f64 },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingJuliaConstant => write!(f, "missing Julia constant"),
            Self::UnexpectedMandelbrotConstant => write!(f, "Mandelbrot has no constant"),
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size must be positive: {}x{}", width, height)
            }
            Self::DegenerateCanvas { size } => {
                write!(f, "canvas {} is too small: at least one side must be 2 or more pixels", size)
            }
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom must be a finite number greater than zero, got {}", zoom)
            }
            Self::NonFiniteCenter { x, y } => {
                write!(f, "center must be finite, got ({}, {})", x, y)
            }
            Self::NonFiniteConstant { real, imag } => {
                write!(f, "Julia constant must be finite, got ({}, {})", real, imag)
            }
        }
    }
}

impl Error for ConfigurationError {}

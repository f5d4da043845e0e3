use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::errors::ConfigurationError;
use crate::core::fractals::fractal_kinds::{FractalKind, FractalModel};

pub const DEFAULT_SIZE: CanvasSize = CanvasSize::new(512, 512);
pub const DEFAULT_DEPTH: u32 = 256;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_CENTER: Point = Point { x: 0.0, y: 0.0 };

/// Everything one field generation reads. Only constructible through
/// [`GenerationConfig::new`], so a value of this type is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    model: FractalModel,
    size: CanvasSize,
    depth: u32,
    zoom: f64,
    center: Point,
}

impl GenerationConfig {
    pub fn new(
        kind: FractalKind,
        c: Option<Complex>,
        size: CanvasSize,
        depth: u32,
        zoom: f64,
        center: Point,
    ) -> Result<Self, ConfigurationError> {
        let model = match (kind, c) {
            (FractalKind::Julia, Some(c)) => FractalModel::Julia { c },
            (FractalKind::Julia, None) => return Err(ConfigurationError::MissingJuliaConstant),
            (FractalKind::Mandelbrot, None) => FractalModel::Mandelbrot,
            (FractalKind::Mandelbrot, Some(_)) => {
                return Err(ConfigurationError::UnexpectedMandelbrotConstant);
            }
        };

        Self::from_model(model, size, depth, zoom, center)
    }

    pub fn from_model(
        model: FractalModel,
        size: CanvasSize,
        depth: u32,
        zoom: f64,
        center: Point,
    ) -> Result<Self, ConfigurationError> {
        if size.width == 0 || size.height == 0 {
            return Err(ConfigurationError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        if size.side() < 2 {
            return Err(ConfigurationError::DegenerateCanvas { size });
        }

        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ConfigurationError::InvalidZoom(zoom));
        }

        if let Some(c) = model.constant().filter(|c| !c.is_finite()) {
            return Err(ConfigurationError::NonFiniteConstant {
                real: c.real,
                imag: c.imag,
            });
        }

        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(ConfigurationError::NonFiniteCenter {
                x: center.x,
                y: center.y,
            });
        }

        Ok(Self {
            model,
            size,
            depth,
            zoom,
            center,
        })
    }

    #[must_use]
    pub fn model(&self) -> FractalModel {
        self.model
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandelbrot(size: CanvasSize, zoom: f64) -> Result<GenerationConfig, ConfigurationError> {
        GenerationConfig::new(FractalKind::Mandelbrot, None, size, 80, zoom, DEFAULT_CENTER)
    }

    #[test]
    fn test_valid_julia() {
        let c = Complex::new(-0.7, 0.27015);
        let config = GenerationConfig::new(
            FractalKind::Julia,
            Some(c),
            CanvasSize::new(500, 300),
            1024,
            1.0,
            DEFAULT_CENTER,
        )
        .unwrap();

        assert_eq!(config.model(), FractalModel::Julia { c });
        assert_eq!(config.size(), CanvasSize::new(500, 300));
        assert_eq!(config.depth(), 1024);
    }

    #[test]
    fn test_valid_mandelbrot() {
        let config = GenerationConfig::new(
            FractalKind::Mandelbrot,
            None,
            CanvasSize::new(500, 500),
            80,
            0.8,
            Point { x: -0.75, y: 0.0 },
        )
        .unwrap();

        assert_eq!(config.model(), FractalModel::Mandelbrot);
        assert_eq!(config.zoom(), 0.8);
        assert_eq!(config.center(), Point { x: -0.75, y: 0.0 });
    }

    #[test]
    fn test_julia_requires_constant() {
        let result =
            GenerationConfig::new(FractalKind::Julia, None, DEFAULT_SIZE, 10, 1.0, DEFAULT_CENTER);

        assert_eq!(result, Err(ConfigurationError::MissingJuliaConstant));
    }

    #[test]
    fn test_mandelbrot_rejects_constant() {
        let result = GenerationConfig::new(
            FractalKind::Mandelbrot,
            Some(Complex::ZERO),
            DEFAULT_SIZE,
            10,
            1.0,
            DEFAULT_CENTER,
        );

        assert_eq!(result, Err(ConfigurationError::UnexpectedMandelbrotConstant));
    }

    #[test]
    fn test_zero_width_or_height_rejected() {
        assert_eq!(
            mandelbrot(CanvasSize::new(0, 10), 1.0),
            Err(ConfigurationError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            mandelbrot(CanvasSize::new(10, 0), 1.0),
            Err(ConfigurationError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_single_pixel_canvas_rejected() {
        let size = CanvasSize::new(1, 1);

        assert_eq!(
            mandelbrot(size, 1.0),
            Err(ConfigurationError::DegenerateCanvas { size })
        );
    }

    #[test]
    fn test_single_row_canvas_accepted() {
        assert!(mandelbrot(CanvasSize::new(2, 1), 1.0).is_ok());
    }

    #[test]
    fn test_zoom_must_be_positive_and_finite() {
        for zoom in [0.0, -1.0, f64::INFINITY] {
            assert_eq!(
                mandelbrot(DEFAULT_SIZE, zoom),
                Err(ConfigurationError::InvalidZoom(zoom))
            );
        }

        assert!(matches!(
            mandelbrot(DEFAULT_SIZE, f64::NAN),
            Err(ConfigurationError::InvalidZoom(_))
        ));
    }

    #[test]
    fn test_center_must_be_finite() {
        let result = GenerationConfig::new(
            FractalKind::Mandelbrot,
            None,
            DEFAULT_SIZE,
            10,
            1.0,
            Point { x: f64::INFINITY, y: 0.0 },
        );

        assert!(matches!(result, Err(ConfigurationError::NonFiniteCenter { .. })));
    }

    #[test]
    fn test_julia_constant_must_be_finite() {
        let result = GenerationConfig::new(
            FractalKind::Julia,
            Some(Complex::new(f64::NAN, 0.0)),
            DEFAULT_SIZE,
            10,
            1.0,
            DEFAULT_CENTER,
        );

        assert!(matches!(result, Err(ConfigurationError::NonFiniteConstant { .. })));
    }

    #[test]
    fn test_zero_depth_is_valid() {
        let config = GenerationConfig::new(
            FractalKind::Mandelbrot,
            None,
            CanvasSize::new(4, 4),
            0,
            1.0,
            DEFAULT_CENTER,
        );

        assert!(config.is_ok());
    }
}

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;
use crate::core::data::field::Field;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours every entry of `field` into a packed RGB buffer of the same shape.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    field: &Field,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(field.values().len() * 3);

    for &iterations in field.values() {
        let Colour { r, g, b } = mapper.map(iterations)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(field.size(), buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::data::canvas_size::CanvasSize;

    #[derive(Debug)]
    struct StubGreyMap {}

    impl ColourMap for StubGreyMap {
        fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
            let v = value as u8;
            Ok(Colour { r: v, g: v, b: v })
        }

        fn kind(&self) -> ColourMapKind {
            ColourMapKind::Cubehelix
        }
    }

    #[derive(Debug)]
    struct StubFailingMap {}

    impl ColourMap for StubFailingMap {
        fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
            Err(ColourMapError::IterationsExceedDepth {
                iterations: value,
                depth: 0,
            })
        }

        fn kind(&self) -> ColourMapKind {
            ColourMapKind::Hsv
        }
    }

    fn field() -> Field {
        Field::from_data(CanvasSize::new(3, 2), 9, vec![1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let results = generate_pixel_buffer(&field(), &StubGreyMap {}).unwrap();

        assert_eq!(
            results.buffer(),
            &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6]
        );
        assert_eq!(results.size(), CanvasSize::new(3, 2));
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let results = generate_pixel_buffer(&field(), &StubFailingMap {});

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_accepts_boxed_colour_maps() {
        let mapper: Box<dyn ColourMap> = Box::new(StubGreyMap {});
        let results = generate_pixel_buffer(&field(), mapper.as_ref()).unwrap();

        assert_eq!(results.buffer_size(), 18);
    }
}

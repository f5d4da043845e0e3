use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use image::RgbImage;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::output_format::OutputFormat;
use crate::presenters::file::ppm::write_ppm;

/// Writes the buffer in the format named by the file extension.
#[derive(Debug, Default)]
pub struct ImageFilePresenter {}

impl ImageFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
        let format = OutputFormat::from_path(filepath)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

        let Some(image_format) = format.image_format() else {
            let file = File::create(filepath)?;
            return write_ppm(buffer, BufWriter::new(file));
        };

        let size = buffer.size();
        let image = RgbImage::from_raw(size.width, size.height, buffer.buffer().clone())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("pixel buffer does not fill a {} image", size),
                )
            })?;

        image
            .save_with_format(filepath, image_format)
            .map_err(io::Error::other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn buffer() -> PixelBuffer {
        PixelBuffer::from_data(CanvasSize::new(2, 1), vec![255, 0, 0, 0, 0, 255]).unwrap()
    }

    #[test]
    fn test_ppm_extension_writes_binary_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");

        ImageFilePresenter::new().present(&buffer(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(written.len(), 11 + 6);
    }

    #[test]
    fn test_png_extension_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fractal.png");

        ImageFilePresenter::new().present(&buffer(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(&PNG_SIGNATURE));

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.into_raw(), buffer().buffer().clone());
    }

    #[test]
    fn test_bmp_extension_writes_bmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fractal.BMP");

        ImageFilePresenter::new().present(&buffer(), &path).unwrap();

        assert!(std::fs::read(&path).unwrap().starts_with(b"BM"));
    }

    #[test]
    fn test_unknown_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fractal.txt");

        let err = ImageFilePresenter::new().present(&buffer(), &path).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();

        for name in ["out.ppm", "out.png"] {
            let path = dir.path().join("missing").join(name);
            assert!(ImageFilePresenter::new().present(&buffer(), &path).is_err());
        }
    }
}

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use image::ImageFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedOutputFormat {
    pub path: PathBuf,
}

impl fmt::Display for UnsupportedOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot tell the image format of '{}': use one of {}",
            self.path.display(),
            OutputFormat::EXTENSIONS.join(", ")
        )
    }
}

impl Error for UnsupportedOutputFormat {}

/// Image format of an output file, named by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
    Bmp,
    Jpeg,
    Tiff,
}

impl OutputFormat {
    pub const EXTENSIONS: [&'static str; 7] =
        [".ppm", ".png", ".bmp", ".jpg", ".jpeg", ".tif", ".tiff"];

    pub fn from_path(path: &Path) -> Result<Self, UnsupportedOutputFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ppm") => Ok(Self::Ppm),
            Some("png") => Ok(Self::Png),
            Some("bmp") => Ok(Self::Bmp),
            Some("jpg" | "jpeg") => Ok(Self::Jpeg),
            Some("tif" | "tiff") => Ok(Self::Tiff),
            _ => Err(UnsupportedOutputFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// The `image` encoder for this format. PPM is written by hand.
    #[must_use]
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            Self::Ppm => None,
            Self::Png => Some(ImageFormat::Png),
            Self::Bmp => Some(ImageFormat::Bmp),
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Tiff => Some(ImageFormat::Tiff),
        }
    }
}

pub mod image_file;
pub mod output_format;
pub mod ppm;

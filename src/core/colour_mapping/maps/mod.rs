pub mod cubehelix;
pub mod hsv_escape;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::maps::{cubehelix::Cubehelix, hsv_escape::HsvEscape};

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, depth: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::Cubehelix => Box::new(Cubehelix::new(depth)),
        ColourMapKind::Hsv => Box::new(HsvEscape::new(depth)),
    }
}

use std::error::Error;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_field::generate_field::generate_field_with_pool;
use crate::core::actions::generate_field::worker_pool::{WorkerPool, available_threads};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::generation_config::GenerationConfig;

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        config: &GenerationConfig,
        colour_map_kind: ColourMapKind,
        threads: Option<NonZeroUsize>,
    ) -> Result<(), Box<dyn Error>> {
        let threads = threads.unwrap_or_else(available_threads);

        info!("Rendering {} set...", config.model().kind());
        info!("Image size: {}", config.size());
        info!("Depth: {}", config.depth());
        info!("Zoom: {}, center: {}x{}", config.zoom(), config.center().x, config.center().y);
        if let Some(c) = config.model().constant() {
            info!("Constant: {}", c);
        }
        info!("Threads: {}", threads);

        let start = Instant::now();
        let field = {
            let pool = WorkerPool::new(threads)?;
            generate_field_with_pool(config, &pool)?
        };
        info!("Duration:   {:?}", start.elapsed());

        let colour_map = colour_map_factory(colour_map_kind, field.depth());
        info!("Colour map: {}", colour_map.display_name());

        self.buffer = Some(generate_pixel_buffer(&field, colour_map.as_ref())?);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("Saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

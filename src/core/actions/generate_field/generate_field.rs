use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};
use rayon::prelude::*;

use crate::core::actions::generate_field::errors::{ComputationFailure, GenerateFieldError};
use crate::core::actions::generate_field::ports::row_computer::RowComputer;
use crate::core::actions::generate_field::worker_pool::WorkerPool;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::field::{Field, FieldData};
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::generation_config::GenerationConfig;
use crate::core::fractals::row_computer::EscapeTimeRows;

/// Validates the parameters and computes the field on a pool sized to the
/// hardware.
pub fn generate_fractal_field(
    kind: FractalKind,
    c: Option<Complex>,
    size: CanvasSize,
    depth: u32,
    zoom: f64,
    center: Point,
) -> Result<Field, GenerateFieldError> {
    let config = GenerationConfig::new(kind, c, size, depth, zoom, center)?;
    generate_field(&config)
}

/// Computes the field on a pool built for this call alone.
///
/// The pool is dropped, and its threads released, before this returns.
pub fn generate_field(config: &GenerationConfig) -> Result<Field, GenerateFieldError> {
    let pool = WorkerPool::with_available_parallelism()?;
    generate_field_with_pool(config, &pool)
}

pub fn generate_field_with_pool(
    config: &GenerationConfig,
    pool: &WorkerPool,
) -> Result<Field, GenerateFieldError> {
    let field = generate_rows(&EscapeTimeRows::new(config), pool, config.depth())?;
    Ok(field)
}

/// Runs one task per row of `computer` on `pool` and assembles the field.
///
/// Each task writes only into the slice reserved for its own row index, so the
/// result does not depend on which worker finishes first. The first failing
/// row stops further rows from being started and the partial buffer is
/// dropped.
pub fn generate_rows<R: RowComputer>(
    computer: &R,
    pool: &WorkerPool,
    depth: u32,
) -> Result<Field, ComputationFailure> {
    let size = CanvasSize::new(computer.width(), computer.rows());
    let width = size.width as usize;
    let mut values: FieldData = vec![0; size.pixel_count()];

    debug!(
        "computing {} rows of {} pixels on {} worker threads",
        size.height,
        size.width,
        pool.threads()
    );

    if width > 0 {
        pool.install(|| {
            values
                .par_chunks_mut(width)
                .enumerate()
                .try_for_each(|(index, slot)| {
                    let row = index as u32;
                    let computed = run_row_task(computer, row)?;

                    if computed.len() != slot.len() {
                        return Err(ComputationFailure::RowLengthMismatch {
                            row,
                            expected: slot.len(),
                            actual: computed.len(),
                        });
                    }

                    slot.copy_from_slice(&computed);
                    Ok(())
                })
        })
        .inspect_err(|err| warn!("field generation aborted: {}", err))?;
    }

    Field::from_data(size, depth, values).map_err(ComputationFailure::InvalidField)
}

fn run_row_task<R: RowComputer>(computer: &R, row: u32) -> Result<Vec<u32>, ComputationFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| computer.compute_row(row))) {
        Ok(Ok(values)) => Ok(values),
        Ok(Err(err)) => Err(ComputationFailure::Row {
            row,
            source: Box::new(err),
        }),
        Err(payload) => Err(ComputationFailure::RowPanicked {
            row,
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

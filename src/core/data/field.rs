use crate::core::data::canvas_size::CanvasSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    BoundsMismatch {
        canvas_size: usize,
        data_size: usize,
    },
    ValueExceedsDepth {
        index: usize,
        value: u32,
        depth: u32,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                canvas_size,
                data_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match field data size {}",
                    canvas_size, data_size
                )
            }
            Self::ValueExceedsDepth {
                index,
                value,
                depth,
            } => {
                write!(
                    f,
                    "field value {} at index {} exceeds depth {}",
                    value, index, depth
                )
            }
        }
    }
}

impl Error for FieldError {}

pub type FieldData = Vec<u32>;

/// Escape-time counts for every pixel of a canvas, stored row-major with
/// row 0 at the top.
///
/// Every value lies in `0..=depth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    size: CanvasSize,
    depth: u32,
    values: FieldData,
}

impl Field {
    pub fn from_data(size: CanvasSize, depth: u32, values: FieldData) -> Result<Self, FieldError> {
        if size.pixel_count() != values.len() {
            return Err(FieldError::BoundsMismatch {
                canvas_size: size.pixel_count(),
                data_size: values.len(),
            });
        }

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v > depth) {
            return Err(FieldError::ValueExceedsDepth {
                index,
                value,
                depth,
            });
        }

        Ok(Self {
            size,
            depth,
            values,
        })
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// `[width, height]`, the shape renderers expect alongside the values.
    #[must_use]
    pub fn shape(&self) -> [u32; 2] {
        [self.size.width, self.size.height]
    }

    #[must_use]
    pub fn row(&self, row: u32) -> Option<&[u32]> {
        if row >= self.size.height {
            return None;
        }

        let width = self.size.width as usize;
        let start = row as usize * width;

        Some(&self.values[start..start + width])
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> {
        // zero-width fields hold no values; max(1) keeps chunks_exact valid
        self.values.chunks_exact(self.size.width.max(1) as usize)
    }

    #[must_use]
    pub fn get(&self, col: u32, row: u32) -> Option<u32> {
        if col >= self.size.width {
            return None;
        }

        self.row(row).map(|r| r[col as usize])
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> FieldData {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_2x3() -> Field {
        Field::from_data(CanvasSize::new(2, 3), 9, vec![0, 1, 2, 3, 4, 5]).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let field = field_2x3();

        assert_eq!(field.width(), 2);
        assert_eq!(field.height(), 3);
        assert_eq!(field.depth(), 9);
        assert_eq!(field.shape(), [2, 3]);
        assert_eq!(field.values(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_data_too_small() {
        let result = Field::from_data(CanvasSize::new(2, 2), 9, vec![1, 2, 3]);

        assert_eq!(
            result.unwrap_err(),
            FieldError::BoundsMismatch {
                canvas_size: 4,
                data_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_rejects_value_above_depth() {
        let result = Field::from_data(CanvasSize::new(2, 1), 4, vec![4, 5]);

        assert_eq!(
            result.unwrap_err(),
            FieldError::ValueExceedsDepth {
                index: 1,
                value: 5,
                depth: 4
            }
        );
    }

    #[test]
    fn test_row_access() {
        let field = field_2x3();

        assert_eq!(field.row(0), Some(&[0, 1][..]));
        assert_eq!(field.row(2), Some(&[4, 5][..]));
        assert_eq!(field.row(3), None);
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let field = field_2x3();
        let rows: Vec<&[u32]> = field.rows().collect();

        assert_eq!(rows, vec![&[0, 1][..], &[2, 3][..], &[4, 5][..]]);
    }

    #[test]
    fn test_get_is_column_then_row() {
        let field = field_2x3();

        assert_eq!(field.get(1, 0), Some(1));
        assert_eq!(field.get(0, 2), Some(4));
        assert_eq!(field.get(2, 0), None);
        assert_eq!(field.get(0, 3), None);
    }

    #[test]
    fn test_into_values_hands_over_buffer() {
        assert_eq!(field_2x3().into_values(), vec![0, 1, 2, 3, 4, 5]);
    }
}

use std::fmt;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidDimensions { width: usize, height: usize }, // Width or height is zero
    DimensionMismatch { expected: usize, actual: usize }, // Crossability array length != width * height
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            GridError::DimensionMismatch { expected, actual } => {
                write!(f, "crossability array has {actual} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

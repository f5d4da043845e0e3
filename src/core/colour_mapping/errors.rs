use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapError {
    IterationsExceedDepth { iterations: u32, depth: u32 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedDepth { iterations, depth } => {
                write!(f, "iterations {} exceeds depth {}", iterations, depth)
            }
        }
    }
}

impl Error for ColourMapError {}

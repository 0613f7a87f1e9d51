//! Textual decoding of shape sequences.
//!
//! The canonical encoding is a stream of whitespace-separated positive
//! integers read pairwise as `(width, height)`. Decoding is all-or-nothing:
//! any malformed item fails the whole sequence before a single shape is
//! produced, so a partially valid file is never playable.

use crate::core::geometry::{InvalidShapeError, Shape};

/// Error produced while decoding a shape sequence.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseShapesError {
    #[display("expected an even number of items, got {count}")]
    OddItemCount { count: usize },
    #[display("item {item:?} is not an integer")]
    NotAnInteger { item: String },
    #[display("item {item:?} is not a legal shape dimension")]
    ZeroDimension {
        item: String,
        source: InvalidShapeError,
    },
}

/// Decodes a whitespace-separated list of integer pairs into shapes.
pub fn parse_shapes(input: &str) -> Result<Vec<Shape>, ParseShapesError> {
    let items: Vec<&str> = input.split_whitespace().collect();
    if items.len() % 2 != 0 {
        return Err(ParseShapesError::OddItemCount { count: items.len() });
    }
    items
        .chunks_exact(2)
        .map(|pair| {
            let width = parse_dimension(pair[0])?;
            let height = parse_dimension(pair[1])?;
            Shape::new(width, height).map_err(|source| {
                let item = if width == 0 { pair[0] } else { pair[1] };
                ParseShapesError::ZeroDimension {
                    item: item.to_owned(),
                    source,
                }
            })
        })
        .collect()
}

fn parse_dimension(item: &str) -> Result<usize, ParseShapesError> {
    item.parse().map_err(|_| ParseShapesError::NotAnInteger {
        item: item.to_owned(),
    })
}

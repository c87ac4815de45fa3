use super::label::extract_label;
use super::segmenter::Segment;
use crate::error::{Result, SplitError};

/// A run of consecutive segments that ends up in one output file.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a, 't> {
    segments: &'a [Segment<'t>],
}

impl<'a, 't> Batch<'a, 't> {
    pub fn segments(&self) -> &'a [Segment<'t>] {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn first_label(&self) -> &'t str {
        extract_label(self.segments[0].heading)
    }

    pub fn last_label(&self) -> &'t str {
        extract_label(self.segments[self.segments.len() - 1].heading)
    }

    /// Segment contents joined by a single newline.
    pub fn render(&self) -> String {
        self.segments()
            .iter()
            .map(|s| s.content)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn batch<'a, 't>(segments: &'a [Segment<'t>], group_size: usize) -> Result<Vec<Batch<'a, 't>>> {
    if group_size == 0 {
        return Err(SplitError::InvalidGroupSize(group_size));
    }

    Ok(segments
        .chunks(group_size)
        .map(|segments| Batch { segments })
        .collect())
}

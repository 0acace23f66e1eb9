//! Text source contract and an in-memory implementation

use crate::error::BoxError;

/// Provider of UTF-16 text, possibly in fragments.
///
/// `text_at` returns the text starting at `position`. A slice shorter than the
/// remaining text is legal; the caller asks again at the next position. An empty
/// slice signals that no text is available at `position`.
pub trait TextSource {
    /// Text starting at `position`
    fn text_at(&self, position: usize) -> Result<&[u16], BoxError>;
}

impl<S: TextSource + ?Sized> TextSource for &S {
    fn text_at(&self, position: usize) -> Result<&[u16], BoxError> {
        (**self).text_at(position)
    }
}

/// Text source over a borrowed slice
///
/// With a chunk size set, every request returns at most that many code units,
/// emulating a fragmented backing store.
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a> {
    text: &'a [u16],
    chunk_size: Option<usize>,
}

impl<'a> SliceSource<'a> {
    /// Serve the whole remaining slice on every request
    pub fn new(text: &'a [u16]) -> Self {
        Self {
            text,
            chunk_size: None,
        }
    }

    /// Serve at most `chunk_size` code units per request (a size of 0 is treated as 1)
    pub fn chunked(text: &'a [u16], chunk_size: usize) -> Self {
        Self {
            text,
            chunk_size: Some(chunk_size.max(1)),
        }
    }

    /// Total length of the underlying text
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the underlying text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<'a> From<&'a [u16]> for SliceSource<'a> {
    fn from(text: &'a [u16]) -> Self {
        SliceSource::new(text)
    }
}

impl<'a> From<&'a Vec<u16>> for SliceSource<'a> {
    fn from(text: &'a Vec<u16>) -> Self {
        SliceSource::new(text)
    }
}

impl TextSource for SliceSource<'_> {
    fn text_at(&self, position: usize) -> Result<&[u16], BoxError> {
        let rest = self.text.get(position..).unwrap_or(&[]);
        Ok(match self.chunk_size {
            Some(size) => &rest[..rest.len().min(size)],
            None => rest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_slice() {
        let text = [1u16, 2, 3, 4];
        let source = SliceSource::new(&text);
        assert_eq!(source.text_at(0).unwrap(), &[1, 2, 3, 4]);
        assert_eq!(source.text_at(3).unwrap(), &[4]);
    }

    #[test]
    fn test_chunked_slice() {
        let text = [1u16, 2, 3, 4, 5];
        let source = SliceSource::chunked(&text, 2);
        assert_eq!(source.text_at(0).unwrap(), &[1, 2]);
        assert_eq!(source.text_at(4).unwrap(), &[5]);
    }

    #[test]
    fn test_past_end_is_empty() {
        let text = [1u16, 2];
        let source = SliceSource::chunked(&text, 8);
        assert!(source.text_at(2).unwrap().is_empty());
        assert!(source.text_at(100).unwrap().is_empty());
    }

    #[test]
    fn test_from_slice() {
        let text = [1u16, 2, 3];
        let source = SliceSource::from(&text[..]);
        assert_eq!(source.len(), 3);
        assert!(!source.is_empty());
        assert_eq!(source.text_at(1).unwrap(), &[2, 3]);

        let empty: &[u16] = &[];
        assert!(SliceSource::from(empty).is_empty());
    }

    #[test]
    fn test_zero_chunk_size_still_progresses() {
        let text = [7u16, 8];
        let source = SliceSource::chunked(&text, 0);
        assert_eq!(source.text_at(0).unwrap(), &[7]);
    }
}

//! Window assembly over fragmented sources
//!
//! The analyses need one contiguous slice. When the source hands out the whole
//! window in its first chunk, that chunk is borrowed; otherwise the chunks are
//! copied into an owned buffer that never grows past the window.

use std::borrow::Cow;

use log::{debug, trace};
use runbreak_core::error::try_with_capacity;

use crate::config::AnalyzerConfig;
use crate::error::{EngineError, Result};
use crate::source::TextSource;

/// Collects `[position, position + length)` from a [`TextSource`]
#[derive(Debug, Clone, Copy)]
pub struct WindowAssembler {
    max_window: usize,
}

impl WindowAssembler {
    /// Create an assembler honouring the configured window limit
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            max_window: config.max_window,
        }
    }

    /// Assemble the window.
    ///
    /// The result is shorter than `length` when the source runs out of text.
    pub fn assemble<'s, S>(
        &self,
        source: &'s S,
        position: usize,
        length: usize,
    ) -> Result<Cow<'s, [u16]>>
    where
        S: TextSource + ?Sized,
    {
        if length > self.max_window {
            return Err(EngineError::WindowTooLarge {
                requested: length,
                limit: self.max_window,
            });
        }
        if length == 0 {
            return Ok(Cow::Borrowed(&[] as &[u16]));
        }

        let first = source.text_at(position).map_err(EngineError::Source)?;
        trace!("chunk at {position}: {} units", first.len());
        if first.len() >= length {
            return Ok(Cow::Borrowed(&first[..length]));
        }
        if first.is_empty() {
            debug!("source has no text at {position}");
            return Ok(Cow::Borrowed(first));
        }

        let mut buffer = try_with_capacity(length)?;
        buffer.extend_from_slice(first);
        while buffer.len() < length {
            let at = position + buffer.len();
            let chunk = source.text_at(at).map_err(EngineError::Source)?;
            trace!("chunk at {at}: {} units", chunk.len());
            if chunk.is_empty() {
                debug!(
                    "source ran dry after {} of {length} units",
                    buffer.len()
                );
                break;
            }
            let take = chunk.len().min(length - buffer.len());
            buffer.extend_from_slice(&chunk[..take]);
        }

        Ok(Cow::Owned(buffer))
    }
}

impl Default for WindowAssembler {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

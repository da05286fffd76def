//! Bounded line reading over buffered input.
//!
//! [`LineReader`] produces line segments lazily from any [`BufRead`]
//! source, holding at most a cap's worth of line content per segment.
//! Overlong lines are split across segments, never reassembled.

use crate::error::{IoError, Result};
use crate::io::unicode;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default maximum bytes of line content per segment.
pub const DEFAULT_MAX_LINE_LEN: usize = 256;

/// Smallest usable cap, the width of the widest UTF-8 code point.
///
/// Below this the reader could fail to make progress on multi-byte text.
pub const MIN_LINE_CAP: usize = 4;

/// Path label for readers not backed by a file.
const MEMORY_PATH: &str = "<memory>";

/// One read/print cycle's worth of line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSegment {
    /// Segment text, without a line terminator.
    pub text: String,

    /// `true` when the segment ended at a newline or EOF; `false` when it
    /// was cut at the cap and the line continues in the next segment.
    pub complete: bool,
}

/// Bounded, lazy line reader.
///
/// Yields [`LineSegment`]s of at most `cap` bytes each. Line feeds are
/// stripped; carriage returns are preserved as content (input is opaque
/// text). The sequence is finite, not restartable, and fused after the
/// first error. The underlying handle is released on drop, on every exit
/// path.
///
/// # Examples
///
/// ```
/// use hello_echo::io::LineReader;
///
/// let input = std::io::Cursor::new("foo\nbar\n");
/// let lines: Vec<String> = LineReader::from_reader(input, 256)
///     .map(|seg| seg.map(|s| s.text))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines, ["foo", "bar"]);
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    /// Underlying buffered source.
    inner: R,
    /// Path label for error messages.
    path: String,
    /// Maximum bytes of line content per segment.
    cap: usize,
    /// Bytes read from the source but not yet handed out.
    pending: Vec<u8>,
    /// Absolute offset of the first pending byte, for UTF-8 diagnostics.
    consumed: u64,
    /// Source is exhausted.
    eof: bool,
    /// An error was yielded; the iterator is fused.
    failed: bool,
}

impl LineReader<BufReader<File>> {
    /// Opens `path` for bounded line reading.
    ///
    /// This is the only operation that produces [`IoError::OpenFailed`];
    /// any OS-level open error (missing file, permission denied) maps to
    /// it, with the OS reason text carried verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OpenFailed`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, cap: usize) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.display().to_string();

        let file = File::open(path_ref).map_err(|e| IoError::OpenFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self::with_path(BufReader::new(file), path_str, cap))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Creates a reader over any buffered source.
    ///
    /// Diagnostics label the source `<memory>`.
    #[must_use]
    pub fn from_reader(inner: R, cap: usize) -> Self {
        Self::with_path(inner, MEMORY_PATH.to_string(), cap)
    }

    fn with_path(inner: R, path: String, cap: usize) -> Self {
        Self {
            inner,
            path,
            // caps below the minimum cannot guarantee progress
            cap: cap.max(MIN_LINE_CAP),
            pending: Vec::new(),
            consumed: 0,
            eof: false,
            failed: false,
        }
    }

    /// Returns the cap in effect.
    #[must_use]
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the path label used in diagnostics.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Pulls the next chunk of bytes from the source into `pending`.
    fn fill(&mut self) -> Result<()> {
        let chunk = self.inner.fill_buf().map_err(|e| IoError::ReadFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        if chunk.is_empty() {
            self.eof = true;
        } else {
            let n = chunk.len();
            self.pending.extend_from_slice(chunk);
            self.inner.consume(n);
        }
        Ok(())
    }

    /// Produces the next segment, or `None` at end of input.
    fn next_segment(&mut self) -> Result<Option<LineSegment>> {
        loop {
            match self.pending.iter().position(|&b| b == b'\n') {
                // complete line within the cap
                Some(nl) if nl <= self.cap => {
                    let text = self.take_text(nl)?;
                    self.pending.remove(0); // the newline itself
                    self.consumed += 1;
                    return Ok(Some(LineSegment {
                        text,
                        complete: true,
                    }));
                }
                // line continues past the cap
                Some(_) => return self.split_segment().map(Some),
                None if self.pending.len() > self.cap => return self.split_segment().map(Some),
                None if self.eof => {
                    if self.pending.is_empty() {
                        return Ok(None);
                    }
                    // final line without a terminator
                    let len = self.pending.len();
                    let text = self.take_text(len)?;
                    return Ok(Some(LineSegment {
                        text,
                        complete: true,
                    }));
                }
                None => self.fill()?,
            }
        }
    }

    /// Removes the first `len` pending bytes as validated text.
    fn take_text(&mut self, len: usize) -> Result<String> {
        match std::str::from_utf8(&self.pending[..len]) {
            Ok(s) => {
                let text = s.to_string();
                self.pending.drain(..len);
                self.consumed += len as u64;
                Ok(text)
            }
            Err(e) => Err(IoError::InvalidUtf8 {
                path: self.path.clone(),
                offset: self.consumed + e.valid_up_to() as u64,
            }
            .into()),
        }
    }

    /// Cuts a cap-bounded segment off the front of an overlong line.
    fn split_segment(&mut self) -> Result<LineSegment> {
        let valid = unicode::utf8_prefix(&self.pending);
        if valid.is_empty() {
            // more than a full code point's worth of pending bytes with no
            // valid prefix: the input is not UTF-8
            return Err(IoError::InvalidUtf8 {
                path: self.path.clone(),
                offset: self.consumed,
            }
            .into());
        }

        let at = unicode::split_point(valid, self.cap);
        let text = valid[..at].to_string();
        self.pending.drain(..at);
        self.consumed += at as u64;
        Ok(LineSegment {
            text,
            complete: false,
        })
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<LineSegment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_segment() {
            Ok(seg) => seg.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

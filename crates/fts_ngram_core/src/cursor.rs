//! Forward-only cursor over a byte buffer.
//!
//! The segmenter reads one byte at a time and never backtracks, so the
//! cursor is just a position plus the buffer. It is [`Copy`], which makes
//! state snapshots free when a caller needs to remember a run start.

/// Forward-only cursor over a byte buffer.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the byte at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes, stopping at the end of the buffer.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(
            self.pos + n <= self.buf.len(),
            "advance past end of buffer: {} + {n} > {}",
            self.pos,
            self.buf.len()
        );
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while let Some(byte) = self.current() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
    }
}

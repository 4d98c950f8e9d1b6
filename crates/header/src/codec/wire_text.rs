//! Character sources that can be written as header bytes.
//!
//! Every character maps to exactly one byte on the wire. Code points below 256 are
//! truncated to a single byte (Latin-1 style, not UTF-8), anything above is written as
//! `?`. Sources that are already bytes are copied as is.

use bytes::Bytes;
use http::{HeaderName, HeaderValue};

/// Placeholder written for characters that don't fit in one byte.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Text that knows its size on the wire and how to write itself there.
pub trait WireText {
    /// Number of bytes [`write_wire`](WireText::write_wire) produces.
    fn wire_len(&self) -> usize;

    /// Writes the wire bytes into `dst`, whose length is exactly [`wire_len`](WireText::wire_len).
    fn write_wire(&self, dst: &mut [u8]);
}

/// Narrows one character to its wire byte.
#[inline]
pub fn narrow(ch: char) -> u8 {
    u8::try_from(u32::from(ch)).unwrap_or(REPLACEMENT_BYTE)
}

impl WireText for str {
    #[inline]
    fn wire_len(&self) -> usize {
        if self.is_ascii() { self.len() } else { self.chars().count() }
    }

    #[inline]
    fn write_wire(&self, dst: &mut [u8]) {
        if self.is_ascii() {
            dst.copy_from_slice(self.as_bytes());
            return;
        }

        for (byte, ch) in dst.iter_mut().zip(self.chars()) {
            *byte = narrow(ch);
        }
    }
}

impl WireText for String {
    #[inline]
    fn wire_len(&self) -> usize {
        self.as_str().wire_len()
    }

    #[inline]
    fn write_wire(&self, dst: &mut [u8]) {
        self.as_str().write_wire(dst);
    }
}

impl WireText for [u8] {
    #[inline]
    fn wire_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn write_wire(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self);
    }
}

impl WireText for Bytes {
    #[inline]
    fn wire_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn write_wire(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self);
    }
}

impl WireText for HeaderName {
    #[inline]
    fn wire_len(&self) -> usize {
        self.as_str().len()
    }

    #[inline]
    fn write_wire(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self.as_str().as_bytes());
    }
}

impl WireText for HeaderValue {
    #[inline]
    fn wire_len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    fn write_wire(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self.as_bytes());
    }
}

//! Output buffers the header encoders write into.
//!
//! Writing follows a reserve, claim, fill protocol: [`HeaderBuf::try_reserve`] is the only
//! step that can fail, [`HeaderBuf::claim`] then hands out the region right after the
//! write cursor and moves the cursor past it. Callers fill the whole claimed region.

use bytes::BytesMut;

use crate::protocol::EncodeError;

/// A growable byte buffer whose write cursor is its length.
pub trait HeaderBuf {
    /// Current write position.
    fn writer_index(&self) -> usize;

    /// Makes sure at least `additional` bytes can be written after the write cursor.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Capacity`] if the buffer can't grow that far. Nothing is
    /// written and the write cursor doesn't move.
    fn try_reserve(&mut self, additional: usize) -> Result<(), EncodeError>;

    /// Advances the write cursor by `len` and returns the region it moved over.
    fn claim(&mut self, len: usize) -> &mut [u8];
}

impl HeaderBuf for BytesMut {
    #[inline]
    fn writer_index(&self) -> usize {
        self.len()
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), EncodeError> {
        // BytesMut::reserve panics past isize::MAX, report it instead
        let fits = self.len().checked_add(additional).is_some_and(|total| isize::try_from(total).is_ok());
        if !fits {
            return Err(EncodeError::capacity(additional, "capacity overflow"));
        }
        self.reserve(additional);
        Ok(())
    }

    #[inline]
    fn claim(&mut self, len: usize) -> &mut [u8] {
        let start = self.len();
        // zero-filled before the caller overwrites it, keeps claim free of unsafe
        self.resize(start + len, 0);
        &mut self[start..]
    }
}

impl HeaderBuf for Vec<u8> {
    #[inline]
    fn writer_index(&self) -> usize {
        self.len()
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), EncodeError> {
        Vec::try_reserve(self, additional).map_err(|e| EncodeError::capacity(additional, e))
    }

    #[inline]
    fn claim(&mut self, len: usize) -> &mut [u8] {
        let start = self.len();
        // zero-filled before the caller overwrites it, keeps claim free of unsafe
        self.resize(start + len, 0);
        &mut self[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_advances_cursor() {
        let mut buf = BytesMut::from(&b"abc"[..]);
        HeaderBuf::try_reserve(&mut buf, 2).unwrap();
        buf.claim(2).copy_from_slice(b"de");

        assert_eq!(buf.writer_index(), 5);
        assert_eq!(&buf[..], b"abcde");
    }

    #[test]
    fn overflow_is_reported() {
        let mut buf = BytesMut::from(&b"abc"[..]);
        let result = HeaderBuf::try_reserve(&mut buf, usize::MAX);
        assert!(matches!(result, Err(EncodeError::Capacity { requested: usize::MAX, .. })));
        assert_eq!(&buf[..], b"abc");

        let mut vec = b"abc".to_vec();
        let result = HeaderBuf::try_reserve(&mut vec, usize::MAX);
        assert!(matches!(result, Err(EncodeError::Capacity { .. })));
        assert_eq!(vec.writer_index(), 3);
    }
}

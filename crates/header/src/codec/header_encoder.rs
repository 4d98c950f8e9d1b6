//! Header block encoder implementation for serializing a whole [`Headers`] collection
//!
//! The block is every entry of the collection in insertion order, each written by
//! [`encode_header_line`], followed by the empty line that ends a header section.
//!
//! # Features
//!
//! - Insertion ordered output, repeated names are written once per value
//! - Optional limit on the encoded block size
//! - A failed encode leaves the destination buffer as it was

use bytes::BytesMut;
use tokio_util::codec::Encoder;
use tracing::{error, trace};

use super::{encode_header_line, HeaderBuf};
use crate::ensure;
use crate::protocol::{EncodeError, Headers};

/// Initial buffer size reserved for a header block
const INIT_HEADER_BLOCK_SIZE: usize = 1024;

/// Encoder for header blocks implementing the [`Encoder`] trait.
///
/// Unlimited by default, use [`HeaderEncoder::with_max_block_size`] to bound the number
/// of bytes a single block may take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderEncoder {
    max_block_size: Option<usize>,
}

impl HeaderEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_block_size(max_block_size: usize) -> Self {
        Self { max_block_size: Some(max_block_size) }
    }

    pub fn max_block_size(&self) -> Option<usize> {
        self.max_block_size
    }

    fn encode_block(&self, headers: &Headers, dst: &mut BytesMut, start: usize) -> Result<(), EncodeError> {
        HeaderBuf::try_reserve(dst, INIT_HEADER_BLOCK_SIZE)?;

        for (name, value) in headers {
            encode_header_line(name, value, dst)?;
            self.check_block_size(dst.len() - start)?;
        }

        HeaderBuf::try_reserve(dst, 2)?;
        dst.claim(2).copy_from_slice(b"\r\n");
        self.check_block_size(dst.len() - start)
    }

    fn check_block_size(&self, current_size: usize) -> Result<(), EncodeError> {
        if let Some(max_size) = self.max_block_size {
            ensure!(current_size <= max_size, EncodeError::too_large_block(current_size, max_size));
        }
        Ok(())
    }
}

impl<'a> Encoder<&'a Headers> for HeaderEncoder {
    type Error = EncodeError;

    /// Encodes a header block into the provided bytes buffer.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The block exceeds the configured maximum size
    /// - The buffer can't grow to hold the block
    fn encode(&mut self, headers: &'a Headers, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let start = dst.len();
        let result = self.encode_block(headers, dst, start);

        match &result {
            Ok(()) => trace!(header_count = headers.len(), block_size = dst.len() - start, "encoded header block"),
            Err(e) => {
                error!(cause = %e, "encode header block error");
                dst.truncate(start);
            }
        }

        result
    }
}

impl Encoder<Headers> for HeaderEncoder {
    type Error = EncodeError;

    fn encode(&mut self, headers: Headers, dst: &mut BytesMut) -> Result<(), Self::Error> {
        <Self as Encoder<&Headers>>::encode(self, &headers, dst)
    }
}

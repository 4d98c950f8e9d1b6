//! Header collections and header line encoding for micro-http codecs
//!
//! This crate provides the two pieces a protocol codec needs before an outbound message
//! hits the wire: an ordered, multi-valued header collection that the codec fills in, and
//! a line encoder that serializes one `name: value\r\n` entry at a time straight into the
//! output buffer.
//!
//! # Features
//!
//! - Insertion ordered, multi-valued headers with case-insensitive name lookup
//! - One generic typed add/set pair for numbers, booleans and timestamps
//! - Pseudo-header names for frame based protocols (`:method`, `:path`, ...)
//! - Allocation free line encoding into `BytesMut` or `Vec<u8>`
//! - A `tokio_util` encoder for complete header blocks
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_header::codec::encode_header_line;
//! use micro_header::protocol::{pseudo, Headers};
//!
//! let mut headers = Headers::new();
//! headers.add(pseudo::METHOD, "GET").add("Accept", "text/html");
//!
//! let mut buf = BytesMut::new();
//! for (name, value) in &headers {
//!     encode_header_line(name, value, &mut buf).unwrap();
//! }
//!
//! assert_eq!(&buf[..], b":method: GET\r\nAccept: text/html\r\n");
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: the [`protocol::Headers`] collection, typed value conversion and errors
//! - [`codec`]: the header line encoder, the buffer abstraction it writes through and
//!   the header block encoder
//!
//! # Limitations
//!
//! - Encoding only, decoding headers from wire bytes is not supported
//! - Header content is never validated, characters outside Latin-1 are written as `?`

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

//! Header encoding module
//!
//! This module turns header entries into wire bytes. The building block is
//! [`encode_header_line`], which writes one `name: value\r\n` line; [`HeaderEncoder`]
//! uses it to write a whole [`Headers`](crate::protocol::Headers) block.
//!
//! # Components
//!
//! - [`encode_header_line`]: writes one header line into a buffer
//! - [`HeaderEncoder`]: `tokio_util` encoder for a complete header block
//! - [`HeaderBuf`]: the output buffer abstraction, implemented for `BytesMut` and `Vec<u8>`
//! - [`WireText`]: character sources and their one-byte-per-character narrowing
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_header::codec::HeaderEncoder;
//! use micro_header::protocol::Headers;
//! use tokio_util::codec::Encoder;
//!
//! let mut headers = Headers::new();
//! headers.add("Server", "micro").add_typed("Content-Length", 0);
//!
//! let mut buf = BytesMut::new();
//! HeaderEncoder::new().encode(&headers, &mut buf).unwrap();
//! assert_eq!(&buf[..], b"Server: micro\r\nContent-Length: 0\r\n\r\n");
//! ```

mod header_buf;
mod header_encoder;
mod line_encoder;
mod wire_text;

pub use header_buf::HeaderBuf;
pub use header_encoder::HeaderEncoder;
pub use line_encoder::encode_header_line;
pub use wire_text::{narrow, WireText, REPLACEMENT_BYTE};

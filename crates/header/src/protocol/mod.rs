//! Header collection, typed value conversion and error types.
//!
//! - **Collection** ([`headers`]): [`Headers`], the ordered multi-valued header map a
//!   codec fills in before encoding
//! - **Typed values** ([`header_text`]): [`ToHeaderText`] and [`HttpTimestamp`], the
//!   canonical text form of non-text values
//! - **Pseudo-headers** ([`pseudo`]): `:method`, `:path` and friends for frame based
//!   protocols
//! - **Errors** ([`error`]): [`EncodeError`]

mod headers;
pub use headers::Headers;
pub use headers::Iter;

mod header_text;
pub use header_text::HttpTimestamp;
pub use header_text::ToHeaderText;

mod error;
pub use error::EncodeError;

pub mod pseudo;

//! Pseudo-header names used by frame based protocols.
//!
//! These carry request and response control data next to the regular headers. At this
//! layer they are plain entries, told apart only by the leading `:` in the name.

/// `:host`
pub const HOST: &str = ":host";
/// `:method`
pub const METHOD: &str = ":method";
/// `:path`
pub const PATH: &str = ":path";
/// `:scheme`
pub const SCHEME: &str = ":scheme";
/// `:status`
pub const STATUS: &str = ":status";
/// `:version`
pub const VERSION: &str = ":version";

/// Returns true if `name` is a pseudo-header name.
pub fn is_pseudo(name: &str) -> bool {
    name.starts_with(':')
}

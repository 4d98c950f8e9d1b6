//! Header line encoder
//!
//! Serializes a single header entry as `name: value\r\n` directly into the output buffer,
//! without building the line as a string first. The block terminator (the final empty
//! line) is left to the caller.

use tracing::trace;

use super::{HeaderBuf, WireText};
use crate::protocol::EncodeError;

/// Bytes a line adds on top of name and value: `": "` and `"\r\n"`.
const LINE_OVERHEAD: usize = 4;

/// Appends `name: value\r\n` at the write cursor of `buf`.
///
/// Every character becomes exactly one byte, see [`WireText`] for the narrowing rule.
/// Input is never rejected, characters that don't fit in a byte are written as `?`.
///
/// # Errors
///
/// Returns [`EncodeError::Capacity`] when the buffer can't grow by the line length. In that
/// case nothing is written and the write cursor stays where it was.
///
/// # Example
///
/// ```
/// use micro_header::codec::encode_header_line;
///
/// let mut buf = Vec::new();
/// encode_header_line("Content-Type", "text/html", &mut buf).unwrap();
/// assert_eq!(buf, b"Content-Type: text/html\r\n");
/// ```
pub fn encode_header_line<N, V, B>(name: &N, value: &V, buf: &mut B) -> Result<(), EncodeError>
where
    N: WireText + ?Sized,
    V: WireText + ?Sized,
    B: HeaderBuf + ?Sized,
{
    let name_len = name.wire_len();
    let value_len = value.wire_len();
    let entry_len = name_len
        .checked_add(value_len)
        .and_then(|len| len.checked_add(LINE_OVERHEAD))
        .ok_or_else(|| EncodeError::capacity(usize::MAX, "header line length overflow"))?;

    buf.try_reserve(entry_len)?;

    let line = buf.claim(entry_len);
    let (name_dst, rest) = line.split_at_mut(name_len);
    name.write_wire(name_dst);
    let (separator, rest) = rest.split_at_mut(2);
    separator.copy_from_slice(b": ");
    let (value_dst, crlf) = rest.split_at_mut(value_len);
    value.write_wire(value_dst);
    crlf.copy_from_slice(b"\r\n");

    trace!(entry_len, writer_index = buf.writer_index(), "encoded header line");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{pseudo, Headers};
    use bytes::BytesMut;
    use http::HeaderValue;

    /// Buffer that refuses to grow past a fixed size.
    struct BoundedBuf {
        inner: Vec<u8>,
        limit: usize,
    }

    impl HeaderBuf for BoundedBuf {
        fn writer_index(&self) -> usize {
            self.inner.len()
        }

        fn try_reserve(&mut self, additional: usize) -> Result<(), EncodeError> {
            if self.inner.len() + additional > self.limit {
                return Err(EncodeError::capacity(additional, "bounded buffer is full"));
            }
            HeaderBuf::try_reserve(&mut self.inner, additional)
        }

        fn claim(&mut self, len: usize) -> &mut [u8] {
            self.inner.claim(len)
        }
    }

    #[test]
    fn ascii_line() {
        let mut buf = BytesMut::new();
        encode_header_line("Host", "127.0.0.1:8080", &mut buf).unwrap();

        assert_eq!(&buf[..], b"Host: 127.0.0.1:8080\r\n");
        assert_eq!(buf.len(), "Host".len() + "127.0.0.1:8080".len() + 4);
    }

    #[test]
    fn empty_name_and_value() {
        let mut buf = Vec::new();
        encode_header_line("", "", &mut buf).unwrap();

        assert_eq!(buf, b": \r\n");
    }

    #[test]
    fn no_trimming_or_folding() {
        let mut buf = Vec::new();
        encode_header_line(" X ", "  a\tb  ", &mut buf).unwrap();

        assert_eq!(buf, b" X :   a\tb  \r\n");
    }

    #[test]
    fn wide_chars_become_question_marks() {
        let mut buf = BytesMut::new();
        encode_header_line("X-\u{4e2d}", "a\u{20ac}b", &mut buf).unwrap();

        assert_eq!(&buf[..], b"X-?: a?b\r\n");
        assert_eq!(buf.len(), 3 + 3 + 4);
    }

    #[test]
    fn astral_char_is_one_question_mark() {
        let mut buf = BytesMut::new();
        encode_header_line("X", "\u{1f600}", &mut buf).unwrap();

        assert_eq!(&buf[..], b"X: ?\r\n");
        assert_eq!(buf.len(), 1 + 1 + 4);
    }

    #[test]
    fn latin1_chars_are_narrowed() {
        let mut buf = BytesMut::new();
        encode_header_line("X-Name", "Jos\u{e9}", &mut buf).unwrap();

        assert_eq!(&buf[..], b"X-Name: Jos\xe9\r\n");
    }

    #[test]
    fn byte_sources() {
        let mut buf = BytesMut::new();
        let value = HeaderValue::from_static("no-cache");
        encode_header_line(&http::header::CACHE_CONTROL, &value, &mut buf).unwrap();
        encode_header_line(&b"X-Raw"[..], &b"\xff"[..], &mut buf).unwrap();

        assert_eq!(&buf[..], b"cache-control: no-cache\r\nX-Raw: \xff\r\n");
    }

    #[test]
    fn existing_content_is_untouched() {
        let mut buf = BytesMut::from("HTTP/1.1 200 OK\r\n");
        encode_header_line("Server", "micro", &mut buf).unwrap();

        assert_eq!(&buf[..], b"HTTP/1.1 200 OK\r\nServer: micro\r\n");
    }

    #[test]
    fn headers_in_insertion_order() {
        let mut headers = Headers::new();
        headers.add(pseudo::METHOD, "GET").add("Accept", "text/html");

        let mut buf = BytesMut::with_capacity(0);
        for (name, value) in &headers {
            encode_header_line(name, value, &mut buf).unwrap();
        }

        let expected = b":method: GET\r\nAccept: text/html\r\n";
        assert_eq!(&buf[..], expected);
        assert_eq!(buf.writer_index(), expected.len());
    }

    #[test]
    fn capacity_error_is_propagated() {
        let mut buf = BoundedBuf { inner: b"a: b\r\n".to_vec(), limit: 16 };

        let result = encode_header_line("Content-Type", "text/html", &mut buf);

        assert!(matches!(result, Err(EncodeError::Capacity { requested: 25, .. })));
        assert_eq!(buf.inner, b"a: b\r\n");

        encode_header_line("c", "d", &mut buf).unwrap();
        assert_eq!(buf.inner, b"a: b\r\nc: d\r\n");
    }
}

//! Ordered, multi-valued header collection.
//!
//! [`Headers`] is what a codec fills in while building an outbound message. Entries are
//! kept in one association list in insertion order, so a name may repeat and iteration
//! always yields entries in the order they were added. Names are matched ASCII
//! case-insensitively but keep their original casing for re-emission.

use std::slice;

use http::HeaderMap;

use super::ToHeaderText;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    value: String,
}

impl HeaderEntry {
    #[inline]
    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An insertion ordered multi-map from header name to header values.
///
/// All mutators return `&mut Self`, so calls can be chained:
///
/// ```
/// use micro_header::protocol::Headers;
///
/// let mut headers = Headers::new();
/// headers.add("Accept", "text/html").add("accept", "text/plain").set_typed("Content-Length", 42);
///
/// assert_eq!(headers.get_all("ACCEPT"), vec!["text/html", "text/plain"]);
/// assert_eq!(headers.get("content-length"), Some("42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<HeaderEntry>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Appends one entry, keeping any existing entries for `name`.
    pub fn add<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.entries.push(HeaderEntry { name: name.into(), value: value.into() });
        self
    }

    /// Appends one entry per value, all under the same `name`.
    pub fn add_values<N, I>(&mut self, name: N, values: I) -> &mut Self
    where
        N: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let name = name.into();
        for value in values {
            self.entries.push(HeaderEntry { name: name.clone(), value: value.into() });
        }
        self
    }

    /// Appends a typed value using its canonical text form.
    pub fn add_typed<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: ToHeaderText,
    {
        self.add(name, value.to_header_text())
    }

    /// Appends every entry of `other`, in its order.
    pub fn add_headers(&mut self, other: &Headers) -> &mut Self {
        self.entries.extend_from_slice(&other.entries);
        self
    }

    /// Replaces all entries for `name` with a single `value`.
    pub fn set<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        self.remove(&name);
        self.add(name, value)
    }

    /// Replaces all entries for `name` with `values`.
    pub fn set_values<N, I>(&mut self, name: N, values: I) -> &mut Self
    where
        N: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let name = name.into();
        self.remove(&name);
        self.add_values(name, values)
    }

    /// Replaces all entries for `name` with the canonical text of `value`.
    pub fn set_typed<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: ToHeaderText,
    {
        self.set(name, value.to_header_text())
    }

    /// Replaces the whole collection with a copy of `other`.
    pub fn set_headers(&mut self, other: &Headers) -> &mut Self {
        self.entries.clear();
        self.add_headers(other)
    }

    /// For every distinct name in `other`, replaces the entries of `self` with the ones
    /// from `other`. Names that only exist in `self` are kept untouched.
    pub fn set_all(&mut self, other: &Headers) -> &mut Self {
        for name in other.names() {
            self.remove(name);
        }
        self.add_headers(other)
    }

    /// Removes all entries for `name`, returns true if anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.is(name));
        self.entries.len() != before
    }

    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    /// Returns the first value for `name` in insertion order.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.is(name)).map(|entry| entry.value.as_str())
    }

    /// Returns all values for `name` in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries.iter().filter(|entry| entry.is(name)).map(|entry| entry.value.as_str()).collect()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.is(name))
    }

    /// Returns true if an entry under `name` has the given `value`.
    ///
    /// Names always match case-insensitively. Values match ASCII case-insensitively
    /// when `ignore_case` is true, and exactly otherwise.
    pub fn contains(&self, name: &str, value: &str, ignore_case: bool) -> bool {
        self.entries.iter().filter(|entry| entry.is(name)).any(|entry| {
            if ignore_case { entry.value.eq_ignore_ascii_case(value) } else { entry.value == value }
        })
    }

    /// Distinct names in the order they were first added, with the casing of that first entry.
    ///
    /// Deduplication scans the names found so far, so this is quadratic in the number of entries.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.iter().any(|name| entry.is(name)) {
                names.push(&entry.name);
            }
        }
        names
    }

    /// Number of entries, counting every value of a repeated name.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    /// Iterates owned `(name, value)` pairs in insertion order.
    pub fn iter_as_text(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.iter().map(|(name, value)| (name.to_owned(), value.to_owned()))
    }
}

/// Borrowed iterator over the entries of [`Headers`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, HeaderEntry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N, V> Extend<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.add(name, value);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

/// Copies every entry of an `http::HeaderMap`.
///
/// Value bytes are widened one byte per character, the inverse of the narrowing done by
/// [`encode_header_line`](crate::codec::encode_header_line), so bytes outside ASCII
/// survive a round trip unchanged.
impl From<&HeaderMap> for Headers {
    fn from(map: &HeaderMap) -> Self {
        let mut headers = Headers::with_capacity(map.len());
        for (name, value) in map {
            let value: String = value.as_bytes().iter().copied().map(char::from).collect();
            headers.add(name.as_str(), value);
        }
        headers
    }
}

use std::str::Split;

/// Splits a path into its `/`-delimited segments.
///
/// A single leading and a single trailing empty segment are dropped, so
/// `/a/b` and `/a/b/` both yield `["a", "b"]` and `/` yields nothing. Empty
/// segments anywhere else are kept: `/a//b` yields `["a", "", "b"]`.
///
/// Patterns and request paths are split by the same rule.
pub(crate) fn segments(path: &str) -> Segments<'_> {
    let path = path.strip_prefix('/').unwrap_or(path);

    if path.is_empty() {
        return Segments { inner: None };
    }

    let path = path.strip_suffix('/').unwrap_or(path);
    Segments {
        inner: Some(path.split('/')),
    }
}

/// An iterator over the segments of a path, see [`segments`].
pub(crate) struct Segments<'p> {
    inner: Option<Split<'p, char>>,
}

impl<'p> Iterator for Segments<'p> {
    type Item = &'p str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

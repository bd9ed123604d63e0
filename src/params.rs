use std::{fmt, iter, mem, slice};

/// A single path parameter, consisting of a name and a value.
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Copy, Clone)]
struct Param<'k, 'v> {
    // The name is borrowed from the compiled table, the value from the
    // request path.
    key: &'k str,
    value: &'v str,
}

impl Param<'_, '_> {
    const EMPTY: Param<'static, 'static> = Param { key: "", value: "" };
}

/// The path parameters extracted while matching a request.
///
/// Parameters are kept in path order. Names are stored without the marker
/// character they were declared with.
///
/// ```rust
/// use http::Method;
/// use pathmux::{Route, Table};
///
/// let table = Table::compile([Route::get("/users/:id/posts/:post", "post")]);
/// let matched = table.at(&Method::GET, "/users/7/posts/42").unwrap();
///
/// // Get a specific value by name.
/// assert_eq!(matched.params.get("id"), Some("7"));
///
/// // Iterate through the names and values.
/// let all = matched.params.iter().collect::<Vec<_>>();
/// assert_eq!(all, vec![("id", "7"), ("post", "42")]);
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
pub struct Params<'k, 'v> {
    kind: ParamsKind<'k, 'v>,
}

// Most routes have a small number of parameters, so we can avoid
// heap allocations in the common case.
const SMALL: usize = 3;

#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
enum ParamsKind<'k, 'v> {
    Small([Param<'k, 'v>; SMALL], usize),
    Large(Vec<Param<'k, 'v>>),
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self {
            kind: ParamsKind::Small([Param::EMPTY; SMALL], 0),
        }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        match self.kind {
            ParamsKind::Small(_, len) => len,
            ParamsKind::Large(ref vec) => vec.len(),
        }
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value of the first parameter registered under the given name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.slice()
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value)
    }

    /// Returns an iterator over the names and values in path order.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter {
            inner: self.slice().iter(),
        }
    }

    /// Appends a parameter to the list.
    pub(crate) fn push(&mut self, key: &'k str, value: &'v str) {
        #[cold]
        fn drain_to_vec<T: Default>(len: usize, elem: T, arr: &mut [T; SMALL]) -> Vec<T> {
            let mut vec = Vec::with_capacity(len + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(elem);
            vec
        }

        let param = Param { key, value };
        match &mut self.kind {
            ParamsKind::Small(arr, len) => {
                if *len == SMALL {
                    self.kind = ParamsKind::Large(drain_to_vec(*len, param, arr));
                    return;
                }

                arr[*len] = param;
                *len += 1;
            }
            ParamsKind::Large(vec) => vec.push(param),
        }
    }

    fn slice(&self) -> &[Param<'k, 'v>] {
        match &self.kind {
            ParamsKind::Small(arr, len) => &arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }
}

impl Default for Params<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An iterator over the names and values of a request's [parameters](crate::Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    inner: slice::Iter<'ps, Param<'k, 'v>>,
}

impl<'k, 'v> Iterator for ParamsIter<'_, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|p| (p.key, p.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {}

impl iter::FusedIterator for ParamsIter<'_, '_, '_> {}

impl<'ps, 'k, 'v> IntoIterator for &'ps Params<'k, 'v> {
    type Item = (&'k str, &'v str);
    type IntoIter = ParamsIter<'ps, 'k, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

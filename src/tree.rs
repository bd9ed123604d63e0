use crate::error::MatchError;
use crate::params::Params;
use crate::path;
use crate::route::Route;

use http::Method;
use std::collections::HashMap;

/// Options controlling how route patterns are compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// The character that marks a pattern segment as a named parameter.
    pub param_marker: char,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { param_marker: ':' }
    }
}

/// A compiled routing table.
///
/// The table is a trie with one level per path segment. Literal children are
/// looked up by exact match before the single parameter child of a node is
/// tried, so a lookup costs one map probe per segment no matter how many
/// routes are registered.
///
/// A table is immutable once compiled and can be shared between threads
/// without locking.
///
/// ```rust
/// use http::Method;
/// use pathmux::Table;
///
/// let table = Table::compile(vec![
///     pathmux::Route::get("/home", "Welcome!"),
///     pathmux::Route::get("/users/:id", "A user"),
/// ]);
///
/// let matched = table.at(&Method::GET, "/users/978").unwrap();
/// assert_eq!(matched.params.get("id"), Some("978"));
/// assert_eq!(*matched.value, "A user");
/// ```
#[derive(Debug)]
pub struct Table<T> {
    root: Node<T>,
    len: usize,
}

#[derive(Debug)]
struct Node<T> {
    literals: HashMap<String, Node<T>>,
    param: Option<Box<ParamChild<T>>>,
    endpoints: HashMap<Method, T>,
}

#[derive(Debug)]
struct ParamChild<T> {
    name: String,
    node: Node<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            literals: HashMap::new(),
            param: None,
            endpoints: HashMap::new(),
        }
    }
}

/// A successful match consisting of the registered value
/// and the path parameters extracted from the request path.
#[derive(Debug)]
pub struct Match<'t, 'p, T> {
    /// The value stored under the matched route.
    pub value: &'t T,
    /// The path parameters, names borrowed from the table and values from the path.
    pub params: Params<'t, 'p>,
}

/// Compiles a list of route declarations with the default options.
pub fn compile<T>(routes: impl IntoIterator<Item = Route<T>>) -> Table<T> {
    Table::compile(routes)
}

impl<T> Table<T> {
    /// Compiles route declarations using `:` as the parameter marker.
    pub fn compile(routes: impl IntoIterator<Item = Route<T>>) -> Self {
        Self::compile_with(&CompileOptions::default(), routes)
    }

    /// Compiles route declarations with the given options.
    ///
    /// Compilation never fails. When two routes declare different parameter
    /// names at the same position, or the same method on the same path, the
    /// later declaration replaces the earlier one.
    ///
    /// ```rust
    /// use http::Method;
    /// use pathmux::{CompileOptions, Route, Table};
    ///
    /// let options = CompileOptions { param_marker: '$' };
    /// let table = Table::compile_with(&options, [Route::get("/files/$name", ())]);
    ///
    /// let matched = table.at(&Method::GET, "/files/notes.txt").unwrap();
    /// assert_eq!(matched.params.get("name"), Some("notes.txt"));
    /// ```
    pub fn compile_with(options: &CompileOptions, routes: impl IntoIterator<Item = Route<T>>) -> Self {
        let mut table = Table {
            root: Node::default(),
            len: 0,
        };

        for route in routes {
            table.insert(options, route);
        }

        table
    }

    fn insert(&mut self, options: &CompileOptions, route: Route<T>) {
        let Route {
            method,
            pattern,
            value,
        } = route;

        let mut current = &mut self.root;

        for segment in path::segments(&pattern) {
            current = match segment.strip_prefix(options.param_marker) {
                Some(name) => {
                    let param = current.param.get_or_insert_with(|| {
                        Box::new(ParamChild {
                            name: name.to_owned(),
                            node: Node::default(),
                        })
                    });

                    if param.name != name {
                        warn!(
                            "route '{}' renames parameter '{}' to '{}'",
                            pattern, param.name, name
                        );
                        param.name = name.to_owned();
                    }

                    &mut param.node
                }
                None => current.literals.entry(segment.to_owned()).or_default(),
            };
        }

        if current.endpoints.insert(method.clone(), value).is_some() {
            warn!("route {} '{}' replaces an earlier registration", method, pattern);
        } else {
            self.len += 1;
            debug!("registered route {} '{}'", method, pattern);
        }
    }

    /// Looks up the value registered for a method and path.
    ///
    /// Returns [`MatchError::NotFound`] when no route was registered for the
    /// path, and [`MatchError::MethodNotAllowed`] when routes exist for the
    /// path but none for `method`.
    pub fn at<'t, 'p>(
        &'t self,
        method: &Method,
        path: &'p str,
    ) -> Result<Match<'t, 'p, T>, MatchError> {
        let (node, params) = self.find(path).ok_or(MatchError::NotFound)?;

        if node.endpoints.is_empty() {
            return Err(MatchError::NotFound);
        }

        match node.endpoints.get(method) {
            Some(value) => Ok(Match { value, params }),
            None => Err(MatchError::MethodNotAllowed),
        }
    }

    /// Returns the methods registered for a path, sorted by name.
    ///
    /// The list is empty when no route was registered for the path.
    ///
    /// ```rust
    /// use http::Method;
    /// use pathmux::{Route, Table};
    ///
    /// let table = Table::compile([
    ///     Route::get("/products/:id", "product"),
    ///     Route::delete("/products/:id", "product deleted"),
    /// ]);
    ///
    /// assert_eq!(table.allowed("/products/42"), vec![Method::DELETE, Method::GET]);
    /// assert!(table.allowed("/products").is_empty());
    /// ```
    pub fn allowed(&self, path: &str) -> Vec<Method> {
        let mut allowed = match self.find(path) {
            Some((node, _)) => node.endpoints.keys().cloned().collect::<Vec<_>>(),
            None => Vec::new(),
        };

        allowed.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        allowed
    }

    /// Returns the number of (path, method) registrations in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no routes were registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Walks the trie segment by segment, preferring literal children over
    // the parameter child. Parameters never bind an empty segment.
    fn find<'t, 'p>(&'t self, path: &'p str) -> Option<(&'t Node<T>, Params<'t, 'p>)> {
        let mut current = &self.root;
        let mut params = Params::new();

        for segment in path::segments(path) {
            if let Some(child) = current.literals.get(segment) {
                current = child;
                continue;
            }

            match &current.param {
                Some(param) if !segment.is_empty() => {
                    params.push(&param.name, segment);
                    current = &param.node;
                }
                _ => return None,
            }
        }

        Some((current, params))
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::compile(std::iter::empty())
    }
}

impl<T> FromIterator<Route<T>> for Table<T> {
    fn from_iter<I: IntoIterator<Item = Route<T>>>(iter: I) -> Self {
        Self::compile(iter)
    }
}

use http::Method;

/// A route declaration: a method, a path pattern, and the value it resolves to.
///
/// Patterns start with `/` and are split into `/`-delimited segments. A
/// segment starting with the parameter marker (`:` by default) captures the
/// request segment at that position under the given name:
///
/// ```ignore
///  Pattern: /blog/:category/:post
///
///  /blog/rust/request-routers            match: category="rust", post="request-routers"
///  /blog/rust/request-routers/           match: category="rust", post="request-routers"
///  /blog/rust/                           no match
///  /blog/rust/request-routers/comments   no match
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<T> {
    pub method: Method,
    pub pattern: String,
    pub value: T,
}

impl<T> Route<T> {
    /// Declares a route for an arbitrary method.
    ///
    /// ```rust
    /// use http::Method;
    /// use pathmux::Route;
    ///
    /// let purge = Method::from_bytes(b"PURGE").unwrap();
    /// let route = Route::new(purge, "/cache/:key", "purge");
    /// assert_eq!(route.pattern, "/cache/:key");
    /// ```
    pub fn new(method: Method, pattern: impl Into<String>, value: T) -> Self {
        Self {
            method,
            pattern: pattern.into(),
            value,
        }
    }

    /// Declares a route for GET requests.
    pub fn get(pattern: impl Into<String>, value: T) -> Self {
        Self::new(Method::GET, pattern, value)
    }

    /// Declares a route for HEAD requests.
    pub fn head(pattern: impl Into<String>, value: T) -> Self {
        Self::new(Method::HEAD, pattern, value)
    }

    /// Declares a route for OPTIONS requests.
    pub fn options(pattern: impl Into<String>, value: T) -> Self {
        Self::new(Method::OPTIONS, pattern, value)
    }

    /// Declares a route for POST requests.
    pub fn post(pattern: impl Into<String>, value: T) -> Self {
        Self::new(Method::POST, pattern, value)
    }

    /// Declares a route for PUT requests.
    pub fn put(pattern: impl Into<String>, value: T) -> Self {
        Self::new(Method::PUT, pattern, value)
    }

    /// Declares a route for PATCH requests.
    pub fn patch(pattern: impl Into<String>, value: T) -> Self {
        Self::new(Method::PATCH, pattern, value)
    }

    /// Declares a route for DELETE requests.
    pub fn delete(pattern: impl Into<String>, value: T) -> Self {
        Self::new(Method::DELETE, pattern, value)
    }
}

/// An ordered list of route declarations, collected before compiling.
///
/// ```rust
/// use pathmux::{Routes, Table};
///
/// let mut routes = Routes::new();
/// routes.get("/products", "all products");
/// routes.post("/products", "product created");
///
/// let table = Table::compile(routes);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Routes<T> {
    routes: Vec<Route<T>>,
}

impl<T> Routes<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route for an arbitrary method.
    pub fn handle(&mut self, method: Method, pattern: impl Into<String>, value: T) -> &mut Self {
        self.routes.push(Route::new(method, pattern, value));
        self
    }

    /// Appends a route for GET requests.
    pub fn get(&mut self, pattern: impl Into<String>, value: T) -> &mut Self {
        self.handle(Method::GET, pattern, value)
    }

    /// Appends a route for HEAD requests.
    pub fn head(&mut self, pattern: impl Into<String>, value: T) -> &mut Self {
        self.handle(Method::HEAD, pattern, value)
    }

    /// Appends a route for OPTIONS requests.
    pub fn options(&mut self, pattern: impl Into<String>, value: T) -> &mut Self {
        self.handle(Method::OPTIONS, pattern, value)
    }

    /// Appends a route for POST requests.
    pub fn post(&mut self, pattern: impl Into<String>, value: T) -> &mut Self {
        self.handle(Method::POST, pattern, value)
    }

    /// Appends a route for PUT requests.
    pub fn put(&mut self, pattern: impl Into<String>, value: T) -> &mut Self {
        self.handle(Method::PUT, pattern, value)
    }

    /// Appends a route for PATCH requests.
    pub fn patch(&mut self, pattern: impl Into<String>, value: T) -> &mut Self {
        self.handle(Method::PATCH, pattern, value)
    }

    /// Appends a route for DELETE requests.
    pub fn delete(&mut self, pattern: impl Into<String>, value: T) -> &mut Self {
        self.handle(Method::DELETE, pattern, value)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<T> Default for Routes<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Route<T>> for Routes<T> {
    fn extend<I: IntoIterator<Item = Route<T>>>(&mut self, iter: I) {
        self.routes.extend(iter);
    }
}

impl<T> FromIterator<Route<T>> for Routes<T> {
    fn from_iter<I: IntoIterator<Item = Route<T>>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Routes<T> {
    type Item = Route<T>;
    type IntoIter = std::vec::IntoIter<Route<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

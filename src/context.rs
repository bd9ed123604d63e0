use http::Extensions;

use std::fmt;

/// Request-scoped values handed to a handler.
///
/// Without middleware every handler receives [`Context::background`], which
/// carries nothing. A middleware can derive a new context holding extra
/// values before continuing to the handler. Values are keyed by their type.
///
/// ```rust
/// use pathmux::Context;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct UserId(u64);
///
/// let ctx = Context::background().with_value(UserId(7));
/// assert_eq!(ctx.value::<UserId>(), Some(&UserId(7)));
/// assert_eq!(Context::background().value::<UserId>(), None);
/// ```
#[derive(Clone, Default)]
pub struct Context {
    values: Extensions,
}

impl Context {
    /// An empty context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a copy of this context that also holds `value`.
    ///
    /// A value of the same type already present is shadowed in the copy.
    pub fn with_value<V>(&self, value: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        let mut values = self.values.clone();
        values.insert(value);
        Self { values }
    }

    /// Returns the value of type `V`, if one was attached.
    pub fn value<V>(&self) -> Option<&V>
    where
        V: Send + Sync + 'static,
    {
        self.values.get::<V>()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("values", &self.values.len())
            .finish()
    }
}

//! Heterogeneous call arguments passed through the engine to delegates.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased argument value.
pub type Argument = Arc<dyn Any + Send + Sync>;

/// Ordered list of arguments forwarded verbatim from a trigger call to the
/// delegate.
///
/// Values are reference counted, so cloning the list (which error values do
/// for diagnostics) never clones the values themselves.
///
/// # Example
///
/// ```rust
/// use fsm_delegate::arguments;
///
/// let args = arguments!["argument", 42_u32];
///
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get::<&str>(0), Some(&"argument"));
/// assert_eq!(args.get::<u32>(1), Some(&42));
/// assert_eq!(args.get::<u32>(0), None);
/// ```
#[derive(Clone, Default)]
pub struct Arguments {
    values: Vec<Argument>,
}

impl Arguments {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push(Arc::new(value));
    }

    /// Append an already shared value without re-wrapping it.
    pub fn push_shared(&mut self, value: Argument) {
        self.values.push(value);
    }

    /// Append a value (builder style).
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Return a new list with `value` in front of the existing arguments.
    pub fn prepend(self, value: Argument) -> Self {
        let mut values = Vec::with_capacity(self.values.len() + 1);
        values.push(value);
        values.extend(self.values);
        Self { values }
    }

    /// Borrow the argument at `index` if it has type `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.values.get(index)?.downcast_ref::<T>()
    }

    /// Share the argument at `index` if it has type `T`.
    pub fn get_shared<T: Any + Send + Sync>(&self, index: usize) -> Option<Arc<T>> {
        let value = Arc::clone(self.values.get(index)?);
        value.downcast::<T>().ok()
    }

    /// Raw access to the argument at `index`.
    pub fn get_raw(&self, index: usize) -> Option<&Argument> {
        self.values.get(index)
    }

    /// Check whether `self` and `other` hold the very same values, in order.
    pub fn same_values(&self, other: &Arguments) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.values.iter()
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arguments")
            .field("len", &self.values.len())
            .finish()
    }
}

impl FromIterator<Argument> for Arguments {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

//! Opaque object references stored in reference columns.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased handle to caller-owned data.
///
/// Stores never clone the payload: cloning a `Reference` clones the `Arc`,
/// and reading a reference column returns a handle to the very same
/// allocation that was written. Equality is identity.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use horizon_datamodel::model::Reference;
///
/// let target = Reference::new(PathBuf::from("/etc/passwd"));
/// let copy = target.clone();
///
/// assert!(target.ptr_eq(&copy));
/// assert_eq!(copy.downcast_ref::<PathBuf>(), Some(&PathBuf::from("/etc/passwd")));
/// ```
#[derive(Clone)]
pub struct Reference {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Reference {
    /// Wraps `value` in a new shared reference.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wraps an existing `Arc` without reallocating, keeping its identity.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns the payload if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns the payload as an `Arc<T>` if it is a `T`.
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.inner.clone().downcast::<T>().ok()
    }

    /// Returns `true` if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Reference) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the Rust type name of the payload.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Reference {}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("type", &self.type_name)
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

//! Reference-identity equality for collection members.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// A shared value compared and hashed by identity rather than by structure.
///
/// Wrapping members in `Identity<T>` switches a map or set from value equality to identity
/// equality: two `Identity` handles are equal only if they were cloned from the same
/// allocation, so structurally equal but distinct values remain distinct members.
///
/// # Examples
///
/// ```
/// use classic_collections::identity::Identity;
///
/// let a = Identity::new(vec![1, 2]);
/// let b = Identity::new(vec![1, 2]);
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// assert_eq!(*a, *b);
/// ```
pub struct Identity<T> {
    inner: Rc<T>,
}

impl<T> Identity<T> {
    /// Allocates `value` and returns the first handle to it.
    pub fn new(value: T) -> Self {
        Identity {
            inner: Rc::new(value),
        }
    }

    /// Returns `true` if both handles refer to the same allocation.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }
}

impl<T> From<Rc<T>> for Identity<T> {
    fn from(inner: Rc<T>) -> Self {
        Identity { inner }
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Identity {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Deref for Identity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> PartialEq for Identity<T> {
    fn eq(&self, other: &Identity<T>) -> bool {
        Identity::ptr_eq(self, other)
    }
}

impl<T> Eq for Identity<T> {}

impl<T> Hash for Identity<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (&*self.inner as *const T).hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Identity").field(&*self.inner).finish()
    }
}

use std::cmp::Ordering;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

use super::DefaultOrd;

/// A shared handle which compares by instance identity rather than by the value it points to.
///
/// This is the last tier of [`DefaultOrd`]: two handles are equal only if they point to the same
/// allocation, so separately allocated values with equal contents stay distinct in `diff` and
/// `intersect`. The resulting order is stable for the lifetime of the allocations but otherwise
/// meaningless.
///
/// # Examples
/// ```
/// # use std::rc::Rc;
/// # use typed_collections::compare::{ByIdentity, DefaultOrd};
/// let first = ByIdentity(Rc::new("same"));
/// let second = ByIdentity(Rc::new("same"));
///
/// assert!(first.default_eq(&first.clone()));
/// assert!(!first.default_eq(&second));
/// ```
#[derive(Debug, Clone)]
pub struct ByIdentity<P>(pub P);

impl<P> ByIdentity<P> {
    /// Returns the wrapped handle.
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> Deref for ByIdentity<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.0
    }
}

impl<T: ?Sized> DefaultOrd for ByIdentity<Rc<T>> {
    fn default_cmp(&self, other: &Self) -> Ordering {
        Rc::as_ptr(&self.0).cast::<()>().cmp(&Rc::as_ptr(&other.0).cast::<()>())
    }
}

impl<T: ?Sized> DefaultOrd for ByIdentity<Arc<T>> {
    fn default_cmp(&self, other: &Self) -> Ordering {
        Arc::as_ptr(&self.0).cast::<()>().cmp(&Arc::as_ptr(&other.0).cast::<()>())
    }
}

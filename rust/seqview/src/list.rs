//! The indexable-list capability and the shared [`ListView`] handle.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use seqview_common::Result;
use seqview_common::verify_arg;

use crate::iter::Iter;

/// Capability trait for finite, read-only, positionally indexable lists.
///
/// An implementation reads through to whatever backing it was built over;
/// it never owns a copy of the data. Counts and elements are fetched live
/// on every call, so a mutable backing store that changes after the list
/// was built is observed, not snapshotted.
pub trait IndexableList<T>: 'static {
    /// Returns the number of elements currently reachable through this list.
    ///
    /// Wrappers never cache this value.
    fn count(&self) -> Result<usize>;

    /// Returns the element at `index`.
    ///
    /// Range checking belongs to the innermost implementation that owns the
    /// real bounds; outer layers pass its failures through unchanged, so the
    /// caller sees exactly where a violation occurred.
    fn get(&self, index: usize) -> Result<T>;

    /// Returns a direct traversal iterator when the implementation has one
    /// that is cheaper than an accessor dispatch per element.
    fn iterator(&self) -> Option<Box<dyn Iterator<Item = Result<T>> + '_>> {
        None
    }

    /// Returns this list as a type-erased `Any`, enabling runtime capability
    /// inspection without naming concrete types.
    fn as_any(&self) -> &dyn Any;
}

/// A cheaply cloneable, read-only handle to an indexable list.
///
/// All composition operations live on this handle and produce new handles;
/// none of them copies element data or mutates its inputs. Clones share the
/// same underlying list instance (see [`ListView::ptr_eq`]).
pub struct ListView<T: 'static> {
    inner: Rc<dyn IndexableList<T>>,
}

impl<T: 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        ListView {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> ListView<T> {
    /// Wraps a capability implementation in a shared handle.
    pub fn new(list: impl IndexableList<T>) -> ListView<T> {
        ListView {
            inner: Rc::new(list),
        }
    }

    pub(crate) fn inner(&self) -> &Rc<dyn IndexableList<T>> {
        &self.inner
    }

    /// Live element count of the backing store.
    pub fn count(&self) -> Result<usize> {
        self.inner.count()
    }

    /// Returns `true` when the list currently has no elements.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    /// Returns the element at `index`, fetched live from the backing store.
    pub fn get(&self, index: usize) -> Result<T> {
        self.inner.get(index)
    }

    /// Returns the first element; fails with `InvalidArgument` when empty.
    pub fn first(&self) -> Result<T> {
        verify_arg!(list, self.count()? > 0);
        self.get(0)
    }

    /// Returns the last element; fails with `InvalidArgument` when empty.
    pub fn last(&self) -> Result<T> {
        let count = self.count()?;
        verify_arg!(list, count > 0);
        self.get(count - 1)
    }

    /// Iterates the elements in index order.
    ///
    /// Every call starts a fresh traversal. When the implementation carries
    /// a direct iterator it is used; otherwise elements are fetched one by
    /// one through [`get`](ListView::get), bounded by the count observed at
    /// the start of the traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Copies the elements into a fresh `Vec`.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.iter().collect()
    }

    /// Returns `true` when both handles share the same list instance.
    pub fn ptr_eq(&self, other: &ListView<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ListView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_PREVIEW: usize = 10;
        let count = match self.count() {
            Ok(count) => count,
            Err(_) => return f.write_str("ListView(<invalid>)"),
        };
        let mut list = f.debug_list();
        for entry in self.iter().take(MAX_PREVIEW) {
            match entry {
                Ok(item) => {
                    list.entry(&item);
                }
                Err(_) => {
                    list.entry(&(..));
                    return list.finish();
                }
            }
        }
        if count > MAX_PREVIEW {
            list.entry(&(..));
        }
        list.finish()
    }
}

//! Delegate-backed lists: count and access logic supplied as closures.

use std::any::Any;

use seqview_common::Result;

use crate::list::{IndexableList, ListView};

/// Boxed traversal iterator produced by a supplier closure.
pub type BoxIter<T> = Box<dyn Iterator<Item = Result<T>>>;

/// An [`IndexableList`] whose behavior is injected as owned closures.
///
/// The list owns only the functions that reach into the backing store,
/// never the store itself; correctness is tied to the lifetime of whatever
/// the closures reference. `DelegateList` performs no checks of its own:
/// the counter and getter own their bounds, and whatever they fail with is
/// propagated verbatim.
pub struct DelegateList<T: 'static> {
    counter: Box<dyn Fn() -> Result<usize>>,
    getter: Box<dyn Fn(usize) -> Result<T>>,
    iterator: Option<Box<dyn Fn() -> BoxIter<T>>>,
}

impl<T: 'static> DelegateList<T> {
    /// Builds a list from a size query and a positional accessor.
    pub fn new(
        counter: impl Fn() -> Result<usize> + 'static,
        getter: impl Fn(usize) -> Result<T> + 'static,
    ) -> DelegateList<T> {
        DelegateList {
            counter: Box::new(counter),
            getter: Box::new(getter),
            iterator: None,
        }
    }

    /// Attaches a direct traversal supplier, used to satisfy full-traversal
    /// requests without an accessor dispatch per element.
    pub fn with_iterator(mut self, iterator: impl Fn() -> BoxIter<T> + 'static) -> DelegateList<T> {
        self.iterator = Some(Box::new(iterator));
        self
    }
}

impl<T: 'static> IndexableList<T> for DelegateList<T> {
    fn count(&self) -> Result<usize> {
        (self.counter)()
    }

    fn get(&self, index: usize) -> Result<T> {
        (self.getter)(index)
    }

    fn iterator(&self) -> Option<Box<dyn Iterator<Item = Result<T>> + '_>> {
        self.iterator.as_ref().map(|supplier| {
            let iter: Box<dyn Iterator<Item = Result<T>> + '_> = supplier();
            iter
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: 'static> ListView<T> {
    /// Builds a view directly from a size query and a positional accessor.
    pub fn from_fns(
        counter: impl Fn() -> Result<usize> + 'static,
        getter: impl Fn(usize) -> Result<T> + 'static,
    ) -> ListView<T> {
        ListView::new(DelegateList::new(counter, getter))
    }
}

#[cfg(test)]
mod tests {
    use seqview_common::error::Error;

    use super::*;

    #[test]
    fn traversal_prefers_the_supplied_iterator() {
        // Counter and getter always fail; only the direct iterator works.
        let list: ListView<i32> = ListView::new(
            DelegateList::new(
                || Err(Error::invalid_state("count unavailable")),
                |_| Err(Error::invalid_state("access unavailable")),
            )
            .with_iterator(|| Box::new([0, 1, 2].into_iter().map(Ok))),
        );
        assert!(list.count().is_err());
        assert!(list.get(0).is_err());
        assert_eq!(list.to_vec().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn traversal_restarts_on_every_call() {
        let list = ListView::from_fns(|| Ok(3), Ok);
        assert_eq!(list.to_vec().unwrap(), vec![0, 1, 2]);
        assert_eq!(list.to_vec().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn indexed_traversal_fetches_through_the_getter() {
        let list = ListView::from_fns(|| Ok(4), |i| Ok(10 * i));
        let collected: Vec<_> = list.iter().map(Result::unwrap).collect();
        assert_eq!(collected, vec![0, 10, 20, 30]);
    }
}

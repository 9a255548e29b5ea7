//! Flattened sub-range views over a backing list.

use std::any::Any;
use std::rc::Rc;

use seqview_common::Result;
use seqview_common::error::Error;
use seqview_common::verify_arg;

use crate::list::{IndexableList, ListView};

/// A contiguous `[offset, offset + len)` window over a backing list.
///
/// The window is fixed at construction: `count()` reports `len` without
/// consulting the live backing. Element reads keep going through the
/// backing, so a store that shrank underneath the window surfaces the
/// backing's own failure on access instead of being masked.
pub struct ListSlice<T: 'static> {
    backing: Rc<dyn IndexableList<T>>,
    offset: usize,
    len: usize,
}

impl<T: 'static> IndexableList<T> for ListSlice<T> {
    fn count(&self) -> Result<usize> {
        Ok(self.len)
    }

    fn get(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        self.backing.get(self.offset + index)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: 'static> ListView<T> {
    /// Returns a view of the `[offset, offset + len)` window of this list.
    ///
    /// Fails with `InvalidArgument` when the window exceeds the count at
    /// the time of the call. Slicing a slice does not nest: the result
    /// re-anchors on the original backing with the offsets added, so the
    /// cost of `get` stays constant no matter how many times a caller
    /// re-slices.
    pub fn sublist(&self, offset: usize, len: usize) -> Result<ListView<T>> {
        if let Some(slice) = self.inner().as_any().downcast_ref::<ListSlice<T>>() {
            verify_arg!(
                len,
                offset.checked_add(len).is_some_and(|end| end <= slice.len)
            );
            return Ok(ListView::new(ListSlice {
                backing: slice.backing.clone(),
                offset: slice.offset + offset,
                len,
            }));
        }
        let count = self.count()?;
        verify_arg!(
            len,
            offset.checked_add(len).is_some_and(|end| end <= count)
        );
        Ok(ListView::new(ListSlice {
            backing: self.inner().clone(),
            offset,
            len,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use seqview_common::error::ErrorKind;

    use super::*;

    #[test]
    fn window_count_and_elements() {
        let list = ListView::range(10);
        let window = list.sublist(2, 8).unwrap();
        assert_eq!(window.count().unwrap(), 8);
        assert_eq!(window.to_vec().unwrap(), (2..10).collect::<Vec<_>>());
        for i in 0..8 {
            assert_eq!(window.get(i).unwrap(), list.get(2 + i).unwrap());
        }
    }

    #[test]
    fn nested_sublists_compose_offsets() {
        let window = ListView::range(10)
            .sublist(2, 8)
            .unwrap()
            .sublist(1, 6)
            .unwrap();
        assert_eq!(window.count().unwrap(), 6);
        assert_eq!(window.to_vec().unwrap(), vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn reslicing_matches_a_single_slice() {
        let list = ListView::from_vec((0..16).collect::<Vec<_>>());
        let nested = list
            .sublist(1, 14)
            .unwrap()
            .sublist(2, 10)
            .unwrap()
            .sublist(3, 5)
            .unwrap();
        let flat = list.sublist(6, 5).unwrap();
        assert_eq!(nested.to_vec().unwrap(), flat.to_vec().unwrap());
    }

    #[test]
    fn empty_windows_at_both_ends() {
        let list = ListView::range(10);
        assert_eq!(list.sublist(0, 0).unwrap().count().unwrap(), 0);
        assert_eq!(list.sublist(10, 0).unwrap().count().unwrap(), 0);
        assert!(list.sublist(0, 0).unwrap().to_vec().unwrap().is_empty());
    }

    #[test]
    fn window_exceeding_count_is_rejected() {
        let list = ListView::from_vec(vec![1, 2, 3]);
        let err = list.sublist(2, 2).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
        assert!(list.sublist(4, 0).is_err());
        assert!(list.sublist(usize::MAX, 2).is_err());
    }

    #[test]
    fn nested_window_is_checked_against_the_slice_not_the_backing() {
        let list = ListView::range(10);
        let window = list.sublist(2, 4).unwrap();
        assert!(window.sublist(0, 5).is_err());
        assert!(window.sublist(2, 2).is_ok());
    }

    #[test]
    fn out_of_range_reports_the_window_bounds() {
        let window = ListView::range(10).sublist(2, 4).unwrap();
        assert!(matches!(
            window.get(4).unwrap_err().kind(),
            ErrorKind::OutOfRange { index: 4, count: 4 }
        ));
    }

    #[test]
    fn shrunken_backing_surfaces_the_inner_failure() {
        let items = Rc::new(RefCell::new(vec![1, 2, 3, 4]));
        let window = ListView::from_shared(items.clone()).sublist(1, 3).unwrap();
        assert_eq!(window.to_vec().unwrap(), vec![2, 3, 4]);

        items.borrow_mut().truncate(2);
        // The window length is fixed; the backing's own range failure
        // surfaces on access.
        assert_eq!(window.count().unwrap(), 3);
        assert_eq!(window.get(0).unwrap(), 2);
        assert!(matches!(
            window.get(2).unwrap_err().kind(),
            ErrorKind::OutOfRange { index: 3, count: 2 }
        ));
    }

    #[test]
    fn growing_backing_shows_new_elements_through_the_window() {
        let items = Rc::new(RefCell::new(vec![1, 2, 3]));
        let window = ListView::from_shared(items.clone()).sublist(2, 1).unwrap();
        assert_eq!(window.to_vec().unwrap(), vec![3]);

        items.borrow_mut().insert(0, 0);
        assert_eq!(window.count().unwrap(), 1);
        assert_eq!(window.to_vec().unwrap(), vec![2]);
    }
}

//! Adapters between ordinary collections and the view abstraction.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use seqview_common::Result;
use seqview_common::error::Error;

use crate::delegate::{BoxIter, DelegateList};
use crate::list::ListView;

impl<T: Clone + 'static> ListView<T> {
    /// Live view over a shared mutable vector.
    ///
    /// The view owns only closures that read through the cell, so
    /// insertions and removals are visible through it, and through every
    /// view derived from it, at read time. A cell that is mutably borrowed
    /// when a read arrives surfaces `InvalidState`.
    pub fn from_shared(backing: Rc<RefCell<Vec<T>>>) -> ListView<T> {
        let counter = {
            let backing = backing.clone();
            move || Ok(borrow(&backing)?.len())
        };
        let getter = move |index| {
            let items = borrow(&backing)?;
            items
                .get(index)
                .cloned()
                .ok_or_else(|| Error::out_of_range(index, items.len()))
        };
        ListView::new(DelegateList::new(counter, getter))
    }

    /// Copies `items` into a fresh shared buffer and views it.
    ///
    /// The copy is the price of positional access over a plain sequence;
    /// the result is not live relative to the source. Full traversal goes
    /// through a direct iterator over the buffer instead of an accessor
    /// dispatch per element.
    pub fn from_vec(items: Vec<T>) -> ListView<T> {
        let buffer = Rc::new(items);
        let counter = {
            let buffer = buffer.clone();
            move || Ok(buffer.len())
        };
        let getter = {
            let buffer = buffer.clone();
            move |index| {
                buffer
                    .get(index)
                    .cloned()
                    .ok_or_else(|| Error::out_of_range(index, buffer.len()))
            }
        };
        let iterator = move || -> BoxIter<T> {
            let buffer = buffer.clone();
            let len = buffer.len();
            Box::new((0..len).map(move |index| Ok(buffer[index].clone())))
        };
        ListView::new(DelegateList::new(counter, getter).with_iterator(iterator))
    }
}

fn borrow<T>(cell: &Rc<RefCell<Vec<T>>>) -> Result<Ref<'_, Vec<T>>> {
    cell.try_borrow()
        .map_err(|_| Error::invalid_state("backing store is mutably borrowed"))
}

/// Conversion into the core view abstraction.
///
/// Sources that already are the core abstraction convert by handing back
/// the same underlying list instance; shared mutable vectors convert to
/// live read-through views; plain sequences are copied once.
pub trait AsListView<T> {
    fn as_list_view(&self) -> ListView<T>;
}

impl<T: 'static> AsListView<T> for ListView<T> {
    fn as_list_view(&self) -> ListView<T> {
        self.clone()
    }
}

impl<T: Clone + 'static> AsListView<T> for Rc<RefCell<Vec<T>>> {
    fn as_list_view(&self) -> ListView<T> {
        ListView::from_shared(self.clone())
    }
}

impl<T: Clone + 'static> AsListView<T> for [T] {
    fn as_list_view(&self) -> ListView<T> {
        ListView::from_vec(self.to_vec())
    }
}

impl<T: Clone + 'static> AsListView<T> for Vec<T> {
    fn as_list_view(&self) -> ListView<T> {
        self.as_slice().as_list_view()
    }
}

impl<T: Clone + 'static> FromIterator<T> for ListView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> ListView<T> {
        ListView::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone + 'static> From<Vec<T>> for ListView<T> {
    fn from(items: Vec<T>) -> ListView<T> {
        ListView::from_vec(items)
    }
}

impl<T: Clone + 'static> From<&[T]> for ListView<T> {
    fn from(items: &[T]) -> ListView<T> {
        ListView::from_vec(items.to_vec())
    }
}

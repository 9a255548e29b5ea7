//! Traversal over view elements.

use seqview_common::Result;

use crate::list::ListView;

/// Iterator over the elements of a [`ListView`], yielding `Result<T>`.
///
/// When the underlying implementation carries a direct iterator it is used
/// as the traversal fast path. Otherwise elements are fetched through
/// indexed access: the bound is the count observed when the traversal
/// starts, while each element is read live. The iterator fuses after
/// yielding an error.
pub struct Iter<'a, T: 'static> {
    state: State<'a, T>,
}

enum State<'a, T: 'static> {
    Direct(Box<dyn Iterator<Item = Result<T>> + 'a>),
    Indexed {
        list: &'a ListView<T>,
        pos: usize,
        end: Option<usize>,
    },
}

impl<'a, T: 'static> Iter<'a, T> {
    pub(crate) fn new(list: &'a ListView<T>) -> Iter<'a, T> {
        let state = match list.inner().iterator() {
            Some(direct) => State::Direct(direct),
            None => State::Indexed {
                list,
                pos: 0,
                end: None,
            },
        };
        Iter { state }
    }
}

impl<T: 'static> Iterator for Iter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        match &mut self.state {
            State::Direct(direct) => direct.next(),
            State::Indexed { list, pos, end } => {
                let bound = match *end {
                    Some(bound) => bound,
                    None => match list.count() {
                        Ok(count) => {
                            *end = Some(count);
                            count
                        }
                        Err(err) => {
                            *end = Some(0);
                            return Some(Err(err));
                        }
                    },
                };
                if *pos >= bound {
                    return None;
                }
                match list.get(*pos) {
                    Ok(item) => {
                        *pos += 1;
                        Some(Ok(item))
                    }
                    Err(err) => {
                        *pos = bound;
                        Some(Err(err))
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Direct(direct) => direct.size_hint(),
            State::Indexed {
                pos,
                end: Some(end),
                ..
            } => {
                let remaining = end.saturating_sub(*pos);
                (remaining, Some(remaining))
            }
            State::Indexed { .. } => (0, None),
        }
    }
}

impl<'a, T: 'static> IntoIterator for &'a ListView<T> {
    type Item = Result<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use seqview_common::error::ErrorKind;

    use super::*;

    #[test]
    fn bound_is_read_once_elements_are_read_live() {
        let items = Rc::new(RefCell::new(vec![1, 2, 3]));
        let list = ListView::from_shared(items.clone());

        let mut iter = list.iter();
        assert_eq!(iter.next().unwrap().unwrap(), 1);

        // Growth after the traversal started does not extend it, but the
        // remaining elements are fetched from the live store.
        items.borrow_mut().insert(1, 9);
        assert_eq!(iter.next().unwrap().unwrap(), 9);
        assert_eq!(iter.next().unwrap().unwrap(), 2);
        assert!(iter.next().is_none());
    }

    #[test]
    fn fuses_after_a_count_failure() {
        let list: ListView<i32> = ListView::from_fns(
            || Err(seqview_common::error::Error::invalid_state("gone")),
            |_| unreachable!(),
        );
        let mut iter = list.iter();
        assert!(matches!(
            iter.next().unwrap().unwrap_err().kind(),
            ErrorKind::InvalidState { .. }
        ));
        assert!(iter.next().is_none());
    }

    #[test]
    fn fuses_after_an_access_failure() {
        let items = Rc::new(RefCell::new(vec![1, 2, 3]));
        let list = ListView::from_shared(items.clone());

        let mut iter = list.iter();
        assert_eq!(iter.next().unwrap().unwrap(), 1);
        items.borrow_mut().truncate(1);
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn for_loop_over_a_view() {
        let list = ListView::range(4);
        let mut seen = Vec::new();
        for item in &list {
            seen.push(item.unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn size_hint_tracks_the_indexed_cursor() {
        let list = ListView::range(3);
        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (0, None));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }
}

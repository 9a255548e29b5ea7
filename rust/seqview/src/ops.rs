//! Composition operations producing new live views.
//!
//! Every operation is a pure function from view(s) to a new view: nothing
//! is copied and nothing is mutated. The results are live: count and
//! elements are re-derived from the backing store on every call, as if the
//! operation were re-applied at read time. The `*_exact` family validates
//! the requested amount against the count observed at composition time and
//! keeps enforcing it afterwards; the clamped family never fails on an
//! over-large amount.

use seqview_common::Result;
use seqview_common::error::Error;
use seqview_common::verify_arg;

use crate::delegate::DelegateList;
use crate::list::ListView;

/// Live count remaining once `validated` elements are excluded, or
/// `InvalidState` when the backing shrank below the window that an exact
/// operation validated at composition time.
fn remaining_after(live: usize, validated: usize) -> Result<usize> {
    live.checked_sub(validated).ok_or_else(|| {
        Error::invalid_state(format!(
            "backing count {live} fell below the validated window of {validated}"
        ))
    })
}

impl<T: 'static> ListView<T> {
    /// View of the elements after the first `n`, requiring `n <= count()`.
    ///
    /// The window tracks the live backing: elements inserted into or
    /// removed from the backing store change the result's count and
    /// elements at read time. Once the backing shrinks below `n`, reads
    /// fail with `InvalidState`.
    pub fn skip_exact(&self, n: usize) -> Result<ListView<T>> {
        verify_arg!(n, n <= self.count()?);
        let counter = {
            let list = self.clone();
            move || remaining_after(list.count()?, n)
        };
        let getter = {
            let list = self.clone();
            move |index| {
                let remaining = remaining_after(list.count()?, n)?;
                if index >= remaining {
                    return Err(Error::out_of_range(index, remaining));
                }
                list.get(n + index)
            }
        };
        Ok(ListView::new(DelegateList::new(counter, getter)))
    }

    /// View of the first `n` elements, requiring `n <= count()`.
    ///
    /// The count stays `n`; reads fail with `InvalidState` once the live
    /// backing no longer covers the window.
    pub fn take_exact(&self, n: usize) -> Result<ListView<T>> {
        verify_arg!(n, n <= self.count()?);
        let counter = {
            let list = self.clone();
            move || {
                remaining_after(list.count()?, n)?;
                Ok(n)
            }
        };
        let getter = {
            let list = self.clone();
            move |index| {
                remaining_after(list.count()?, n)?;
                if index >= n {
                    return Err(Error::out_of_range(index, n));
                }
                list.get(index)
            }
        };
        Ok(ListView::new(DelegateList::new(counter, getter)))
    }

    /// View of the elements before the last `n`, requiring `n <= count()`.
    pub fn skip_last_exact(&self, n: usize) -> Result<ListView<T>> {
        verify_arg!(n, n <= self.count()?);
        let counter = {
            let list = self.clone();
            move || remaining_after(list.count()?, n)
        };
        let getter = {
            let list = self.clone();
            move |index| {
                let remaining = remaining_after(list.count()?, n)?;
                if index >= remaining {
                    return Err(Error::out_of_range(index, remaining));
                }
                list.get(index)
            }
        };
        Ok(ListView::new(DelegateList::new(counter, getter)))
    }

    /// View of the last `n` elements, requiring `n <= count()`.
    ///
    /// The window stays anchored to the end of the live backing.
    pub fn take_last_exact(&self, n: usize) -> Result<ListView<T>> {
        verify_arg!(n, n <= self.count()?);
        let counter = {
            let list = self.clone();
            move || {
                remaining_after(list.count()?, n)?;
                Ok(n)
            }
        };
        let getter = {
            let list = self.clone();
            move |index| {
                let count = list.count()?;
                let start = remaining_after(count, n)?;
                if index >= n {
                    return Err(Error::out_of_range(index, n));
                }
                list.get(start + index)
            }
        };
        Ok(ListView::new(DelegateList::new(counter, getter)))
    }

    /// View of the elements after the first `n`, clamped: an over-large
    /// `n` yields an empty view instead of failing.
    pub fn skip(&self, n: usize) -> ListView<T> {
        let counter = {
            let list = self.clone();
            move || Ok(list.count()?.saturating_sub(n))
        };
        let getter = {
            let list = self.clone();
            move |index| {
                let available = list.count()?.saturating_sub(n);
                if index >= available {
                    return Err(Error::out_of_range(index, available));
                }
                list.get(n + index)
            }
        };
        ListView::new(DelegateList::new(counter, getter))
    }

    /// View of up to the first `n` elements, clamped.
    pub fn take(&self, n: usize) -> ListView<T> {
        let counter = {
            let list = self.clone();
            move || Ok(list.count()?.min(n))
        };
        let getter = {
            let list = self.clone();
            move |index| {
                let taken = list.count()?.min(n);
                if index >= taken {
                    return Err(Error::out_of_range(index, taken));
                }
                list.get(index)
            }
        };
        ListView::new(DelegateList::new(counter, getter))
    }

    /// View of the elements before the last `n`, clamped.
    pub fn skip_last(&self, n: usize) -> ListView<T> {
        let counter = {
            let list = self.clone();
            move || Ok(list.count()?.saturating_sub(n))
        };
        let getter = {
            let list = self.clone();
            move |index| {
                let available = list.count()?.saturating_sub(n);
                if index >= available {
                    return Err(Error::out_of_range(index, available));
                }
                list.get(index)
            }
        };
        ListView::new(DelegateList::new(counter, getter))
    }

    /// View of up to the last `n` elements, clamped.
    pub fn take_last(&self, n: usize) -> ListView<T> {
        let counter = {
            let list = self.clone();
            move || Ok(list.count()?.min(n))
        };
        let getter = {
            let list = self.clone();
            move |index| {
                let count = list.count()?;
                let taken = count.min(n);
                if index >= taken {
                    return Err(Error::out_of_range(index, taken));
                }
                list.get(count - taken + index)
            }
        };
        ListView::new(DelegateList::new(counter, getter))
    }

    /// View with the element order reversed.
    pub fn rev(&self) -> ListView<T> {
        let counter = {
            let list = self.clone();
            move || list.count()
        };
        let getter = {
            let list = self.clone();
            move |index| {
                let count = list.count()?;
                if index >= count {
                    return Err(Error::out_of_range(index, count));
                }
                list.get(count - 1 - index)
            }
        };
        ListView::new(DelegateList::new(counter, getter))
    }

    /// View applying `projection` to each element on access.
    pub fn map<U: 'static>(&self, projection: impl Fn(T) -> U + 'static) -> ListView<U> {
        let counter = {
            let list = self.clone();
            move || list.count()
        };
        let getter = {
            let list = self.clone();
            move |index| Ok(projection(list.get(index)?))
        };
        ListView::new(DelegateList::new(counter, getter))
    }

    /// View applying `projection` to each element and its index on access.
    pub fn map_indexed<U: 'static>(
        &self,
        projection: impl Fn(usize, T) -> U + 'static,
    ) -> ListView<U> {
        let counter = {
            let list = self.clone();
            move || list.count()
        };
        let getter = {
            let list = self.clone();
            move |index| Ok(projection(index, list.get(index)?))
        };
        ListView::new(DelegateList::new(counter, getter))
    }

    /// Merges two lists elementwise; the result is as long as the shorter
    /// input. Bounds are owned by the inputs: an access past the shorter
    /// list surfaces that list's own failure.
    pub fn zip_with<U: 'static, V: 'static>(
        &self,
        other: &ListView<U>,
        projection: impl Fn(T, U) -> V + 'static,
    ) -> ListView<V> {
        let counter = {
            let first = self.clone();
            let second = other.clone();
            move || Ok(first.count()?.min(second.count()?))
        };
        let getter = {
            let first = self.clone();
            let second = other.clone();
            move |index| Ok(projection(first.get(index)?, second.get(index)?))
        };
        ListView::new(DelegateList::new(counter, getter))
    }
}

impl ListView<usize> {
    /// The integers `0..n` as an indexable list.
    pub fn range(n: usize) -> ListView<usize> {
        let getter = move |index| {
            if index >= n {
                return Err(Error::out_of_range(index, n));
            }
            Ok(index)
        };
        ListView::new(DelegateList::new(move || Ok(n), getter))
    }
}

use core::{
    iter::FusedIterator,
    marker::PhantomData,
    ptr::NonNull,
};

pub struct Iter<'a, T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {

    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, end: NonNull<T>) -> Self {
        Self {
            ptr,
            end,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {

    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_ref() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = remaining(self.ptr, self.end);
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_ref() })
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {

    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, end: NonNull<T>) -> Self {
        Self {
            ptr,
            end,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {

    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let mut item = self.ptr;
            self.ptr = unsafe { self.ptr.add(1) };
            Some(unsafe { item.as_mut() })
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = remaining(self.ptr, self.end);
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            let mut item = self.end;
            Some(unsafe { item.as_mut() })
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

#[inline(always)]
fn remaining<T>(ptr: NonNull<T>, end: NonNull<T>) -> usize {
    if size_of::<T>() == 0 {
        0
    }
    else {
        unsafe { end.offset_from(ptr) as usize }
    }
}

#[cfg(test)]
mod tests {
    use crate::dyn_array;

    #[test]
    fn forward_and_backward_meet_in_the_middle() {
        let array = dyn_array![1, 2, 3, 4];
        let mut iter = array.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let array = dyn_array![7; 5];
        let mut iter = array.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        iter.next_back();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.size_hint(), (3, Some(3)));
    }

    #[test]
    fn exhausted_iterator_stays_empty() {
        let array = dyn_array![1];
        let mut iter = array.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn mutable_iteration_writes_through() {
        let mut array = dyn_array![1, 2, 3];
        for value in array.iter_mut() {
            *value *= 10;
        }
        assert_eq!(array.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn empty_array_yields_nothing() {
        let array: crate::DynArray<u32> = dyn_array![];
        assert_eq!(array.iter().next(), None);
        assert_eq!(array.iter().len(), 0);
    }
}

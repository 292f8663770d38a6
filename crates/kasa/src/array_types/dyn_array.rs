use core::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::NonNull,
    slice,
};

use crate::{
    const_assert,
    errors::ArrayError,
    raw_buf::{self, RawBuf},
};

use super::{
    Iter,
    IterMut,
    Reserve,
};

use ArrayError::IndexOutOfBounds;

pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

const_assert!(size_of::<DynArray<u32>>() == size_of::<Option<DynArray<u32>>>());

impl<T> DynArray<T> {

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            buf: RawBuf::with_capacity(capacity)?,
            len: 0,
        })
    }

    pub fn from_reserve(reserve: Reserve) -> Result<Self, ArrayError> {
        Self::with_capacity(reserve.capacity())
    }

    pub fn with_len(len: usize) -> Result<Self, ArrayError>
        where
            T: Default
    {
        Ok(Self {
            buf: RawBuf::with_capacity_init(len, T::default)?,
            len,
        })
    }

    pub fn from_elem(value: T, len: usize) -> Result<Self, ArrayError>
        where
            T: Clone
    {
        Ok(Self {
            buf: RawBuf::with_capacity_init(len, || value.clone())?,
            len,
        })
    }

    pub fn with_len_with<F>(len: usize, f: F) -> Result<Self, ArrayError>
        where
            F: FnMut() -> T
    {
        Ok(Self {
            buf: RawBuf::with_capacity_init(len, f)?,
            len,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    #[inline(always)]
    pub fn as_non_null(&self) -> NonNull<T> {
        self.buf.as_non_null()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.buf.slot(index).as_ref() })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        let mut slot = unsafe { self.buf.slot(index) };
        Ok(unsafe { slot.as_mut() })
    }

    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.buf.slot(index).as_ref() }
    }

    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        let mut slot = unsafe { self.buf.slot(index) };
        unsafe { slot.as_mut() }
    }

    pub fn reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        if capacity <= self.buf.capacity() {
            return Ok(())
        }
        self.grow_exact(capacity)
    }

    pub fn resize(&mut self, len: usize) -> Result<(), ArrayError>
        where
            T: Default
    {
        self.resize_with(len, T::default)
    }

    pub fn resize_with<F>(&mut self, len: usize, mut f: F) -> Result<(), ArrayError>
        where
            F: FnMut() -> T
    {
        if len > self.buf.capacity() {
            self.grow_amortized(len)?
        }
        if len > self.len {
            while self.len < len {
                unsafe { self.buf.slot(self.len).write(f()) };
                self.len += 1;
            }
        }
        else if len < self.len {
            let dropped = self.len - len;
            self.len = len;
            unsafe {
                raw_buf::drop_slots(self.buf.as_non_null().add(len), dropped);
            }
        }
        Ok(())
    }

    #[inline(always)]
    pub fn push(&mut self, value: T) -> Result<&mut T, ArrayError> {
        if self.len >= self.buf.capacity() {
            self.grow_amortized(self.len + 1)?
        }
        let mut ptr = unsafe { self.buf.slot(self.len) };
        unsafe { ptr.write(value) };
        self.len += 1;
        Ok(unsafe { ptr.as_mut() })
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.buf.slot(self.len).read() })
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, ArrayError> {
        if index > self.len {
            panic!("index {} was out of bounds with len {} when inserting", index, self.len)
        }
        if self.len >= self.buf.capacity() {
            self.grow_amortized(self.len + 1)?
        }
        unsafe {
            let mut ptr = self.buf.slot(index);
            ptr.copy_to(ptr.add(1), self.len - index);
            ptr.write(value);
            self.len += 1;
            Ok(ptr.as_mut())
        }
    }

    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len {
            panic!("index {} was out of bounds with len {} when removing", index, self.len)
        }
        unsafe {
            let ptr = self.buf.slot(index);
            let removed = ptr.read();
            ptr.add(1).copy_to(ptr, self.len - index - 1);
            self.len -= 1;
            removed
        }
    }

    pub fn swap_remove(&mut self, index: usize) -> T {
        if index >= self.len {
            panic!("index {} was out of bounds with len {} when removing", index, self.len)
        }
        unsafe {
            let removed = self.buf.slot(index).read();
            self.len -= 1;
            if index != self.len {
                self.buf.slot(index).write(self.buf.slot(self.len).read());
            }
            removed
        }
    }

    pub fn append(&mut self, slice: &[T]) -> Result<(), ArrayError>
        where
            T: Clone
    {
        let new_len = self.len + slice.len();
        if new_len > self.buf.capacity() {
            self.grow_amortized(new_len)?
        }
        for value in slice {
            unsafe { self.buf.slot(self.len).write(value.clone()) };
            self.len += 1;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe {
            raw_buf::drop_slots(self.buf.as_non_null(), len);
        }
    }

    pub fn try_clone(&self) -> Result<Self, ArrayError>
        where
            T: Clone
    {
        let mut clone = Self::with_capacity(self.len)?;
        for value in self.as_slice() {
            unsafe { clone.buf.slot(clone.len).write(value.clone()) };
            clone.len += 1;
        }
        Ok(clone)
    }

    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        unsafe {
            let ptr = self.buf.as_non_null();
            let end = ptr.add(self.len);
            Iter::new(ptr, end)
        }
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe {
            let ptr = self.buf.as_non_null();
            let end = ptr.add(self.len);
            IterMut::new(ptr, end)
        }
    }

    fn grow_exact(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(new_capacity >= self.len);
        let mut tmp = RawBuf::with_capacity(new_capacity)?;
        unsafe {
            self.buf
                .as_non_null()
                .copy_to_nonoverlapping(tmp.as_non_null(), self.len);
        }
        self.buf.swap(&mut tmp);
        Ok(())
    }

    fn grow_amortized(&mut self, required: usize) -> Result<(), ArrayError> {
        let doubled = self.buf.capacity().saturating_mul(2);
        self.grow_exact(required.max(doubled).max(1))
    }
}

impl<T> Default for DynArray<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {

    #[inline(always)]
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T: Clone> Clone for DynArray<T> {

    #[inline(always)]
    fn clone(&self) -> Self {
        self.try_clone().unwrap()
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {

    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N).unwrap();
        for value in values {
            unsafe { array.buf.slot(array.len).write(value) };
            array.len += 1;
        }
        array
    }
}

impl<T> TryFrom<Reserve> for DynArray<T> {

    type Error = ArrayError;

    fn try_from(reserve: Reserve) -> Result<Self, Self::Error> {
        Self::with_capacity(reserve.capacity())
    }
}

impl<T> Index<usize> for DynArray<T> {

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.buf.slot(index).as_ref() }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        let mut slot = unsafe { self.buf.slot(index) };
        unsafe { slot.as_mut() }
    }
}

impl<T> AsRef<[T]> for DynArray<T> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Deref for DynArray<T> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {

    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {

    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {

    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynArray<T> {

    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynArray<T> {

    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {

    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for DynArray<T> {

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynArray<T> {

    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Debug> Debug for DynArray<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: Display> Display for DynArray<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            return <str as Display>::fmt("[]", f)
        }
        <char as Display>::fmt(&'[', f)?;
        for value in &self.as_slice()[..self.len - 1] {
            value.fmt(f)?;
            <str as Display>::fmt(", ", f)?;
        }
        self[self.len - 1].fmt(f)?;
        <char as Display>::fmt(&']', f)
    }
}

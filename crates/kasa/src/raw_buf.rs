use core::{
    mem::{needs_drop, ManuallyDrop},
    ptr::NonNull,
};

use crate::{
    errors::ArrayError,
    global_alloc,
};

use ArrayError::{AllocFailed, ZeroSizedElement};

/// A move-only handle to a single heap allocation of `capacity` slots of `T`.
///
/// Slots are storage, not values: the buffer never reads, clones or drops
/// elements on its own. Whoever writes a value into a slot owns its liveness
/// and must take it out or drop it in place before the buffer is released.
/// Dropping a `RawBuf` deallocates the storage only.
///
/// # Errors
///
/// Allocating constructors return `Result` and may fail due to:
///
/// - Allocation failure
/// - `T` being zero-sized
///
/// # Example
///
/// ```rust
/// use kasa::RawBuf;
///
/// let buf = RawBuf::<u32>::with_capacity(8).unwrap();
/// assert_eq!(buf.capacity(), 8);
/// ```
pub struct RawBuf<T> {
    data: NonNull<T>,
    cap: usize,
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {

    /// An empty buffer with capacity zero. Never allocates.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            data: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates storage for exactly `capacity` uninitialized slots.
    ///
    /// A capacity of zero is allowed and allocates nothing.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Ok(Self::new())
        }
        let data = unsafe { global_alloc::allocate_uninit(capacity) }
            .ok_or_else(|| {
                if size_of::<T>() == 0 {
                    ZeroSizedElement
                }
                else {
                    AllocFailed { new_capacity: capacity }
                }
            })?;
        Ok(Self {
            data,
            cap: capacity,
        })
    }

    /// Allocates storage for `capacity` slots and initializes each in order
    /// with `f`.
    ///
    /// On return every slot holds a live value and the caller owns their
    /// liveness. If `f` panics mid-fill, the initialized prefix is dropped
    /// and the storage is released before the panic propagates.
    pub fn with_capacity_init<F>(capacity: usize, mut f: F) -> Result<Self, ArrayError>
        where
            F: FnMut() -> T,
    {
        let buf = Self::with_capacity(capacity)?;
        if capacity == 0 {
            return Ok(buf)
        }
        let (data, cap) = buf.into_raw_parts();
        let mut guard = InitGuard {
            ptr: data,
            cap,
            init: 0,
        };
        for i in 0..cap {
            unsafe { guard.ptr.add(i).write(f()) };
            guard.init += 1;
        }
        core::mem::forget(guard);
        Ok(unsafe { Self::from_raw_parts(data, cap) })
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_non_null(&self) -> NonNull<T> {
        self.data
    }

    /// Address of slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity`. The slot may be uninitialized;
    /// reading a value from it is only valid once one has been written.
    #[inline(always)]
    pub unsafe fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(index < self.cap);
        unsafe { self.data.add(index) }
    }

    /// Exchanges the storage of two buffers without moving any elements.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Relinquishes ownership of the storage to the caller without
    /// deallocating. The pair is suitable for [`RawBuf::from_raw_parts`].
    pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let this = ManuallyDrop::new(self);
        (this.data, this.cap)
    }

    /// Reassembles a buffer from a pointer and capacity.
    ///
    /// # Safety
    ///
    /// The pair must have come from [`RawBuf::into_raw_parts`], or `data`
    /// must point to an allocation of exactly `cap` slots of `T` made by
    /// this crate's allocation strategy.
    pub unsafe fn from_raw_parts(data: NonNull<T>, cap: usize) -> Self {
        Self {
            data,
            cap,
        }
    }
}

impl<T> Default for RawBuf<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {

    fn drop(&mut self) {
        if self.cap != 0 {
            unsafe { global_alloc::free_uninit(self.data, self.cap) }
        }
    }
}

pub(crate) unsafe fn drop_slots<T>(ptr: NonNull<T>, len: usize) {
    if needs_drop::<T>() {
        unsafe {
            for i in 0..len {
                ptr.add(i).drop_in_place();
            }
        }
    }
}

struct InitGuard<T> {
    ptr: NonNull<T>,
    cap: usize,
    init: usize,
}

impl<T> Drop for InitGuard<T> {

    fn drop(&mut self) {
        unsafe {
            drop_slots(self.ptr, self.init);
            global_alloc::free_uninit(self.ptr, self.cap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    struct DropCounter<'a>(&'a Cell<usize>);

    impl Drop for DropCounter<'_> {

        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_has_no_capacity() {
        let buf = RawBuf::<u32>::new();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn with_capacity_allocates_exactly() {
        let buf = RawBuf::<u32>::with_capacity(7).unwrap();
        assert_eq!(buf.capacity(), 7);
    }

    #[test]
    fn with_capacity_zero_never_allocates() {
        let buf = RawBuf::<u32>::with_capacity(0).unwrap();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.as_non_null(), NonNull::dangling());
    }

    #[test]
    fn zero_sized_elements_are_rejected() {
        let err = RawBuf::<()>::with_capacity(4).err().unwrap();
        assert_eq!(err, ArrayError::ZeroSizedElement);
        assert!(RawBuf::<()>::with_capacity(0).is_ok());
    }

    #[test]
    fn huge_capacity_fails_cleanly() {
        let err = RawBuf::<u64>::with_capacity(usize::MAX).err().unwrap();
        assert_eq!(err, ArrayError::AllocFailed { new_capacity: usize::MAX });
    }

    #[test]
    fn slots_hold_written_values() {
        let buf = RawBuf::<u32>::with_capacity(3).unwrap();
        unsafe {
            buf.slot(0).write(5);
            buf.slot(2).write(11);
            assert_eq!(buf.slot(0).read(), 5);
            assert_eq!(buf.slot(2).read(), 11);
        }
    }

    #[test]
    fn with_capacity_init_fills_in_order() {
        let mut next = 0usize;
        let buf = RawBuf::with_capacity_init(4, || {
            let value = next;
            next += 1;
            value
        })
        .unwrap();
        for i in 0..4 {
            assert_eq!(unsafe { buf.slot(i).read() }, i);
        }
    }

    #[test]
    fn with_capacity_init_drops_prefix_on_panic() {
        let drops = Cell::new(0);
        let mut created = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            RawBuf::with_capacity_init(5, || {
                if created == 2 {
                    panic!("init failed")
                }
                created += 1;
                DropCounter(&drops)
            })
        }));
        assert!(result.is_err());
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn into_raw_parts_round_trips() {
        let buf = RawBuf::<u32>::with_capacity(4).unwrap();
        unsafe { buf.slot(0).write(7) };
        let (ptr, cap) = buf.into_raw_parts();
        assert_eq!(cap, 4);
        let buf = unsafe { RawBuf::from_raw_parts(ptr, cap) };
        assert_eq!(buf.capacity(), 4);
        assert_eq!(unsafe { buf.slot(0).read() }, 7);
    }

    #[test]
    fn swap_exchanges_storage() {
        let mut a = RawBuf::<u8>::with_capacity(2).unwrap();
        let mut b = RawBuf::<u8>::with_capacity(9).unwrap();
        let (ptr_a, ptr_b) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!(a.capacity(), 9);
        assert_eq!(b.capacity(), 2);
        assert_eq!(a.as_ptr(), ptr_b);
        assert_eq!(b.as_ptr(), ptr_a);
    }

    #[test]
    fn taken_buffer_leaves_source_empty() {
        let mut buf = RawBuf::<u32>::with_capacity(6).unwrap();
        let taken = core::mem::take(&mut buf);
        assert_eq!(taken.capacity(), 6);
        assert_eq!(buf.capacity(), 0);
    }
}

use core::{
    alloc::Layout,
    ptr::NonNull,
};

use alloc::alloc::{alloc, dealloc};

pub(crate) unsafe fn allocate_uninit<T>(count: usize) -> Option<NonNull<T>> {
    let layout = Layout::array::<T>(count).ok()?;
    if layout.size() == 0 {
        return None
    }
    let ptr = unsafe { alloc(layout) };
    NonNull::new(ptr.cast::<T>())
}

pub(crate) unsafe fn free_uninit<T>(ptr: NonNull<T>, count: usize) {
    let layout = match Layout::array::<T>(count) {
        Ok(l) => l,
        Err(_) => return,
    };
    if layout.size() == 0 {
        return
    }
    unsafe { dealloc(ptr.cast::<u8>().as_ptr(), layout) }
}

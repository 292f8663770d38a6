/// A capacity request for [`DynArray`](super::DynArray), created once and
/// immutable after.
///
/// Passing a `Reserve` to a constructor preallocates storage without
/// creating any elements:
///
/// ```rust
/// use kasa::{DynArray, Reserve};
///
/// let array = DynArray::<u32>::from_reserve(Reserve::new(16)).unwrap();
/// assert_eq!(array.len(), 0);
/// assert_eq!(array.capacity(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reserve(usize);

impl Reserve {

    #[inline(always)]
    pub const fn new(capacity: usize) -> Self {
        Self(capacity)
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_keeps_requested_capacity() {
        let reserve = Reserve::new(12);
        assert_eq!(reserve.capacity(), 12);
    }

    #[test]
    fn reserve_is_a_copy_token() {
        let reserve = Reserve::new(3);
        let copied = reserve;
        assert_eq!(reserve, copied);
    }
}

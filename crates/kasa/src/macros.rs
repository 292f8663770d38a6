#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::DynArray::from_elem($value, $len).unwrap()
    };
    [$($elem:expr),+ $(,)?] => {
        $crate::DynArray::from([$($elem),+])
    };
}

mod dyn_array;
mod iter;
mod reserve;

pub use dyn_array::DynArray;
pub use iter::{Iter, IterMut};
pub use reserve::Reserve;

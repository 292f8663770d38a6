#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod array_types;

mod macros;
mod errors;
mod global_alloc;
mod raw_buf;

pub use errors::ArrayError;
pub use raw_buf::RawBuf;
pub use array_types::{DynArray, Iter, IterMut, Reserve};

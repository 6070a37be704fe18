//! Miscellaneous common structs used throughout the library.

mod id;

pub use id::*;

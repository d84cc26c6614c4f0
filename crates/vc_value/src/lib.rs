#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod dict;
mod error;
mod key;
mod protocol;
mod slice;
mod value;

pub mod object;

#[cfg(feature = "serde")]
mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use dict::Dict;
pub use error::{AccessError, ErrorKind};
pub use key::Key;
pub use object::{Mapping, Object};
pub use slice::Slice;
pub use value::Value;

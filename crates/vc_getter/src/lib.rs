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

mod error;
mod fallback;
mod getter;
mod item;

pub mod attr;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use attr::{AttrGetter, AttrPath, ParseError, attrgetter};
pub use error::BuildError;
pub use fallback::Fallback;
pub use getter::Getter;
pub use item::{FastPath, ItemGetter, itemgetter};

pub use vc_value::{AccessError, ErrorKind, Value};

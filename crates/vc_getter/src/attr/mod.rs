//! Attribute getters over dotted paths.
//!
//! [`AttrGetter`] resolves one or more attribute paths against a target.
//! Each path is parsed into an [`AttrPath`] once, when the getter is built,
//! and reused on every call.
//!
//! # Syntax
//!
//! A path is one or more attribute names joined by `.`: `name`, `a.b.c`.
//! Names may not be empty, so `""`, `".a"`, `"a."` and `"a..b"` are rejected
//! with a [`ParseError`].
//!
//! # Examples
//!
//! ```
//! use vc_getter::{AttrGetter, Getter, Value};
//! use vc_value::object::Namespace;
//!
//! let d = Namespace::new("D").with("size", 3).into_value();
//! let c = Namespace::new("C").with("D", d.clone()).into_value();
//!
//! let size = AttrGetter::new(["D.size"]).unwrap();
//! assert_eq!(size.get(&c).unwrap(), Value::Int(3));
//!
//! let both = AttrGetter::new(["D", "badname"]).unwrap().with_default("noclass");
//! let got = both.get(&c).unwrap();
//! assert!(got.as_slice().unwrap()[0].is(&d));
//! assert_eq!(got.as_slice().unwrap()[1], Value::from("noclass"));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod getter;
mod path;

// -----------------------------------------------------------------------------
// Exports

pub use getter::{AttrGetter, attrgetter};
pub use path::{AttrPath, ParseError};

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt;

use vc_value::{AccessError, ErrorKind, Value};

use crate::attr::AttrPath;
use crate::getter::{absorb, assemble};
use crate::{BuildError, Fallback, Getter};

// -----------------------------------------------------------------------------
// AttrGetter

/// Resolves one or more attribute paths.
///
/// Without a fallback, the first failing path's error is returned as is,
/// exactly as a direct [`Value::get_attr`] chain would report it.
/// With a fallback, a missing attribute anywhere along a path replaces
/// that path's result with the fallback; the other paths are unaffected.
/// Errors of any other kind always propagate.
///
/// # Examples
///
/// ```
/// use vc_getter::{AttrGetter, Getter, Value};
/// use vc_value::object::Namespace;
///
/// let c = Namespace::new("C").into_value();
///
/// let getter = AttrGetter::new(["badname"]).unwrap().with_default("noclass");
/// assert_eq!(getter.get(&c).unwrap(), Value::from("noclass"));
///
/// let strict = AttrGetter::new(["badname"]).unwrap();
/// assert_eq!(
///     strict.get(&c).unwrap_err().to_string(),
///     "'C' object has no attribute 'badname'",
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttrGetter {
    paths: Box<[AttrPath]>,
    fallback: Fallback,
}

impl AttrGetter {
    /// Parses every path and builds a getter with no fallback.
    pub fn new<I>(paths: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let paths = paths
            .into_iter()
            .map(|path| AttrPath::parse(path.as_ref()))
            .collect::<Result<Box<[_]>, _>>()?;

        if paths.is_empty() {
            return Err(BuildError::NoTargets("attrgetter"));
        }

        log::debug!("built attrgetter over {} path(s)", paths.len());
        Ok(Self {
            paths,
            fallback: Fallback::Unset,
        })
    }

    /// Sets `value` as the fallback.
    #[inline]
    pub fn with_default(self, value: impl Into<Value>) -> Self {
        self.with_fallback(Fallback::Value(value.into()))
    }

    #[inline]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    #[inline]
    pub fn paths(&self) -> &[AttrPath] {
        &self.paths
    }

    #[inline]
    pub fn fallback(&self) -> &Fallback {
        &self.fallback
    }
}

impl Getter for AttrGetter {
    fn get(&self, target: &Value) -> Result<Value, AccessError> {
        match &self.fallback {
            Fallback::Unset => assemble(&self.paths, |path| path.resolve(target)),
            Fallback::Value(fallback) => assemble(&self.paths, |path| {
                absorb(path.resolve(target), ErrorKind::MissingAttribute, fallback)
            }),
        }
    }
}

impl fmt::Display for AttrGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attrgetter(")?;
        for (index, path) in self.paths.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(&Value::from(path.to_string()), f)?;
        }
        if let Fallback::Value(fallback) = &self.fallback {
            write!(f, ", default={fallback}")?;
        }
        f.write_str(")")
    }
}

/// Builds an [`AttrGetter`] over `paths` with the given fallback.
///
/// # Examples
///
/// ```
/// use vc_getter::{Fallback, Getter, Value, attrgetter};
/// use vc_value::object::Namespace;
///
/// let getter = attrgetter(["a", "b"], Fallback::Value(Value::Int(0))).unwrap();
/// let target = Namespace::new("T").with("a", 1).into_value();
///
/// assert_eq!(getter.get(&target).unwrap(), Value::tuple([1, 0]));
/// ```
pub fn attrgetter<I>(paths: I, fallback: Fallback) -> Result<AttrGetter, BuildError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Ok(AttrGetter::new(paths)?.with_fallback(fallback))
}

#[cfg(test)]
mod tests {
    use super::AttrGetter;
    use crate::{BuildError, Fallback, Getter};
    use alloc::string::ToString;
    use vc_value::object::Namespace;
    use vc_value::{AccessError, ErrorKind, Value};

    /// `C` with a nested `D`, as used throughout.
    fn class_c() -> (Value, Value) {
        let d = Namespace::new("D").with("name", "D").into_value();
        let c = Namespace::new("C").with("D", d.clone()).into_value();
        (c, d)
    }

    #[test]
    fn missing_single_path_uses_default() {
        let (c, _) = class_c();
        let getter = AttrGetter::new(["badname"]).unwrap().with_default("noclass");
        assert_eq!(getter.get(&c).unwrap(), Value::from("noclass"));
    }

    #[test]
    fn paths_resolve_independently() {
        let (c, d) = class_c();
        let getter = AttrGetter::new(["D", "badname"])
            .unwrap()
            .with_default("noclass");
        let got = getter.get(&c).unwrap();
        let items = got.as_slice().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is(&d));
        assert_eq!(items[1], Value::from("noclass"));

        let getter = AttrGetter::new(["badname", "D"])
            .unwrap()
            .with_default("noclass");
        let got = getter.get(&c).unwrap();
        let items = got.as_slice().unwrap();
        assert_eq!(items[0], Value::from("noclass"));
        assert!(items[1].is(&d));
    }

    #[test]
    fn no_default_matches_direct_access() {
        let (c, _) = class_c();
        let getter = AttrGetter::new(["D.missing"]).unwrap();

        let direct = c.get_attr("D").and_then(|d| d.get_attr("missing")).unwrap_err();
        let via_getter = getter.get(&c).unwrap_err();
        assert_eq!(via_getter.kind(), direct.kind());
        assert_eq!(via_getter.to_string(), direct.to_string());

        let ok = AttrGetter::new(["D.name"]).unwrap();
        assert_eq!(ok.get(&c).unwrap(), Value::from("D"));
    }

    #[test]
    fn no_default_first_failure_wins() {
        let (c, _) = class_c();
        let getter = AttrGetter::new(["D", "first", "second"]).unwrap();
        let err = getter.get(&c).unwrap_err();
        assert_eq!(err.to_string(), "'C' object has no attribute 'first'");
    }

    #[test]
    fn dotted_chain_yields_whole_fallback() {
        let (c, _) = class_c();
        for path in ["D.name.deeper", "D.nope", "nope.name"] {
            let getter = AttrGetter::new([path]).unwrap().with_default(Value::None);
            assert_eq!(getter.get(&c).unwrap(), Value::None, "{path}");
        }
    }

    #[test]
    fn resolved_value_is_never_replaced() {
        let fallback = Namespace::new("F").into_value();
        let stored = Namespace::new("F").into_value();
        let target = Namespace::new("T").with("x", stored.clone()).into_value();

        let getter = AttrGetter::new(["x"]).unwrap().with_default(fallback.clone());
        let got = getter.get(&target).unwrap();
        assert!(got.is(&stored));
        assert!(!got.is(&fallback));

        // A stored value equal to the fallback is still the stored one.
        let target = Namespace::new("T").with("x", "noclass").into_value();
        let getter = AttrGetter::new(["x"]).unwrap().with_default("noclass");
        let got = getter.get(&target).unwrap();
        assert!(got.is(&target.get_attr("x").unwrap()));
    }

    #[test]
    fn missing_hook_is_never_bypassed() {
        let lenient = Namespace::new("Lenient")
            .with_missing_hook(|name| Ok(Value::from(alloc::format!("hook:{name}"))))
            .into_value();
        let getter = AttrGetter::new(["anything"]).unwrap().with_default("fallback");
        assert_eq!(getter.get(&lenient).unwrap(), Value::from("hook:anything"));
    }

    #[test]
    fn other_errors_propagate_with_default() {
        let broken = Namespace::new("Broken")
            .with_missing_hook(|_| Err(AccessError::InvalidValue("lookup exploded".into())))
            .into_value();
        let getter = AttrGetter::new(["x", "y"]).unwrap().with_default("fallback");
        let err = getter.get(&broken).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);

        // Subscript failures raised by an attribute hook are not absorbed either.
        let odd = Namespace::new("Odd")
            .with_missing_hook(|_| Err(AccessError::not_subscriptable("int")))
            .into_value();
        assert!(getter.get(&odd).is_err());
    }

    #[test]
    fn tuple_default_is_not_split() {
        let (c, _) = class_c();
        let pair = Value::tuple([1, 2]);

        let one = AttrGetter::new(["a"]).unwrap().with_default(pair.clone());
        assert_eq!(one.get(&c).unwrap(), pair);

        let two = AttrGetter::new(["a", "b"]).unwrap().with_default(pair.clone());
        assert_eq!(two.get(&c).unwrap(), Value::tuple([pair.clone(), pair]));
    }

    #[test]
    fn build_errors() {
        assert_eq!(
            AttrGetter::new::<[&str; 0]>([]).unwrap_err(),
            BuildError::NoTargets("attrgetter")
        );
        assert!(matches!(
            AttrGetter::new(["ok", "a..b"]).unwrap_err(),
            BuildError::Parse(err) if err.offset == 2
        ));
    }

    #[test]
    fn display() {
        let getter = AttrGetter::new(["a", "b.c"]).unwrap();
        assert_eq!(getter.to_string(), "attrgetter('a', 'b.c')");
        let getter = getter.with_fallback(Fallback::Value(Value::None));
        assert_eq!(getter.to_string(), "attrgetter('a', 'b.c', default=None)");
    }

    #[test]
    fn equality_is_by_parameters() {
        let a = AttrGetter::new(["x.y"]).unwrap().with_default(1);
        let b = AttrGetter::new([alloc::string::String::from("x.y")]).unwrap().with_default(1);
        assert_eq!(a, b);
        assert_ne!(a, b.with_fallback(Fallback::Unset));
    }
}

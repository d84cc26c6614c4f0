//! Provide dotted attribute paths.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use fastvec::FastVec;
use vc_value::{AccessError, Value};

// -----------------------------------------------------------------------------
// Error

/// An error produced while parsing an attribute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset in `path`.
    pub offset: usize,
    /// The path that the error occurred in.
    pub path: Box<str>,
    /// The underlying error.
    pub error: Cow<'static, str>,
}

impl ParseError {
    fn new(path: &str, offset: usize, error: &'static str) -> Self {
        Self {
            offset,
            path: path.into(),
            error: Cow::Borrowed(error),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Encountered an error at offset {} while parsing `{}`: {}",
            self.offset, self.path, self.error,
        )
    }
}

impl core::error::Error for ParseError {}

// -----------------------------------------------------------------------------
// Path

/// A parsed attribute path, a thin wrapper over `Box<[Box<str>]>`.
///
/// Never empty, and no segment is empty.
///
/// # Examples
///
/// ```
/// use vc_getter::AttrPath;
///
/// let path = AttrPath::parse("a.b.c").unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "a.b.c");
///
/// let err = AttrPath::parse("a..b").unwrap_err();
/// assert_eq!(err.offset, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrPath(Box<[Box<str>]>);

impl AttrPath {
    /// Splits `path` on `.` into attribute names.
    pub fn parse(path: &str) -> Result<Self, ParseError> {
        if path.is_empty() {
            return Err(ParseError::new(path, 0, "attribute path is empty"));
        }

        let mut vec: FastVec<Box<str>, 8> = FastVec::new();
        let data = vec.data();

        let mut offset = 0;
        for name in path.split('.') {
            if name.is_empty() {
                return Err(ParseError::new(path, offset, "empty attribute name"));
            }
            data.push(name.into());
            offset += name.len() + 1;
        }

        Ok(Self(vec.into_boxed_slice()))
    }

    /// Returns the number of attribute names.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(AsRef::as_ref)
    }

    /// Walks the path from `target`, one attribute at a time.
    ///
    /// The first failing step fails the whole path.
    pub fn resolve(&self, target: &Value) -> Result<Value, AccessError> {
        let mut names = self.0.iter();
        let mut current = match names.next() {
            Some(name) => target.get_attr(name)?,
            None => return Ok(target.clone()),
        };
        for name in names {
            current = current.get_attr(name)?;
        }
        Ok(current)
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, name) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AttrPath;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use vc_value::object::Namespace;
    use vc_value::{ErrorKind, Value};

    #[test]
    fn parse() {
        let path = AttrPath::parse("name").unwrap();
        assert_eq!(path.segments().collect::<Vec<_>>(), ["name"]);

        let path = AttrPath::parse("a.b.c").unwrap();
        assert_eq!(path.segments().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(AttrPath::parse("").unwrap_err().offset, 0);
        assert_eq!(AttrPath::parse(".a").unwrap_err().offset, 0);
        assert_eq!(AttrPath::parse("a.").unwrap_err().offset, 2);
        assert_eq!(AttrPath::parse("ab..c").unwrap_err().offset, 3);
        assert_eq!(
            AttrPath::parse("a..b").unwrap_err().to_string(),
            "Encountered an error at offset 2 while parsing `a..b`: empty attribute name"
        );
    }

    #[test]
    fn chain_fails_as_a_whole() {
        let b = Namespace::new("B").with("c", 1).into_value();
        let a = Namespace::new("A").with("b", b).into_value();
        let root = Namespace::new("Root").with("a", a).into_value();

        assert_eq!(AttrPath::parse("a.b.c").unwrap().resolve(&root).unwrap(), Value::Int(1));

        let err = AttrPath::parse("a.x.c").unwrap().resolve(&root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAttribute);
        assert_eq!(err.to_string(), "'A' object has no attribute 'x'");

        let err = AttrPath::parse("a.b.c.d").unwrap().resolve(&root).unwrap_err();
        assert_eq!(err.to_string(), "'int' object has no attribute 'd'");
    }
}

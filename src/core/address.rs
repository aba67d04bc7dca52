//! # Addresses
//!
//! An [`Address`] names a navigable location: a module plus an optional
//! element identifier inside it. The location bar carries it as a fragment:
//!
//! ```text
//! #<module>               module only
//! #<module>:<identifier>  element inside a module
//! ```
//!
//! No escaping is performed. Modules and identifiers must not contain `#`,
//! and modules must not contain `:`. Callers are trusted with that.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A (module, identifier) pair. An empty module means "no selection".
#[derive(Debug, Clone, Default)]
pub struct Address {
    module: String,
    identifier: Option<String>,
}

impl Address {
    /// Builds an address. An empty identifier is normalized to absent.
    pub fn new(module: impl Into<String>, identifier: Option<&str>) -> Self {
        Self {
            module: module.into(),
            identifier: identifier.filter(|i| !i.is_empty()).map(str::to_string),
        }
    }

    /// The address that selects nothing.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn is_set(&self) -> bool {
        !self.module.is_empty()
    }

    /// Canonical fragment form, see [`encode`].
    pub fn encode(&self) -> String {
        encode(&self.module, self.identifier())
    }
}

// Absent and empty identifiers compare equal.
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.module == other.module
            && self.identifier().unwrap_or("") == other.identifier().unwrap_or("")
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.module.hash(state);
        self.identifier().unwrap_or("").hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identifier() {
            Some(ident) => write!(f, "{}:{}", self.module, ident),
            None => write!(f, "{}", self.module),
        }
    }
}

/// Encodes `module` and `identifier` as `#module` or `#module:identifier`.
pub fn encode(module: &str, identifier: Option<&str>) -> String {
    match identifier {
        Some(ident) if !ident.is_empty() => format!("#{module}:{ident}"),
        _ => format!("#{module}"),
    }
}

/// Decodes a `#module:identifier` fragment into an [`Address`].
///
/// The module runs up to the first `:`, the identifier is the rest. Input
/// that does not start with `#`, or has an empty module segment, decodes
/// to [`Address::unset`].
pub fn decode(raw: &str) -> Address {
    let Some(fragment) = raw.strip_prefix('#') else {
        return Address::unset();
    };
    let (module, identifier) = match fragment.split_once(':') {
        Some((module, rest)) => (module, Some(rest)),
        None => (fragment, None),
    };
    if module.is_empty() {
        return Address::unset();
    }
    Address::new(module, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_module_only() {
        assert_eq!(encode("beta", None), "#beta");
        assert_eq!(encode("beta", Some("")), "#beta");
    }

    #[test]
    fn test_encode_with_identifier() {
        assert_eq!(encode("beta", Some("x")), "#beta:x");
    }

    #[test]
    fn test_decode_module_and_identifier() {
        let addr = decode("#beta:x");
        assert_eq!(addr.module(), "beta");
        assert_eq!(addr.identifier(), Some("x"));
    }

    #[test]
    fn test_decode_trailing_colon_normalizes_identifier() {
        let addr = decode("#beta:");
        assert_eq!(addr.module(), "beta");
        assert_eq!(addr.identifier(), None);
    }

    #[test]
    fn test_decode_identifier_keeps_later_colons() {
        let addr = decode("#beta:x:y");
        assert_eq!(addr.module(), "beta");
        assert_eq!(addr.identifier(), Some("x:y"));
    }

    #[test]
    fn test_decode_malformed_is_unset() {
        for raw in ["", "beta", "#", "#:x", "beta:x"] {
            assert!(!decode(raw).is_set(), "expected unset for {raw:?}");
        }
    }

    #[test]
    fn test_decode_requires_leading_hash() {
        for raw in ["beta#x", "junk#m:i", "http://localhost:4000/index.html#alpha:Root", " #alpha"] {
            assert!(!decode(raw).is_set(), "expected unset for {raw:?}");
        }
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            ("alpha", None),
            ("alpha", Some("x")),
            ("Mixed_Case.mod", Some("a/b c:d")),
            ("m", Some("")),
        ];
        for (module, ident) in cases {
            let addr = Address::new(module, ident);
            assert_eq!(decode(&addr.encode()), addr, "round trip of {addr}");
        }
    }

    #[test]
    fn test_absent_and_empty_identifier_are_equal() {
        let a = Address {
            module: "m".to_string(),
            identifier: Some(String::new()),
        };
        let b = Address::new("m", None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Address::new("beta", Some("x")).to_string(), "beta:x");
        assert_eq!(Address::new("beta", None).to_string(), "beta");
    }
}

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use xmlrpc::Value;

use super::{FromValue, ToValue, expect_str};
use crate::Error;

const NULL: &str = "OpaqueRef:NULL";

/// A server side class, only used as the type parameter of [`Ref`].
pub trait Class {
    /// The class name as it appears on the wire.
    const NAME: &'static str;
}

/// An opaque reference to a server object of class `C`.
///
/// The id is never parsed, two references are equal when their ids are.
pub struct Ref<C> {
    id: Cow<'static, str>,
    _class: PhantomData<fn() -> C>,
}

impl<C> Ref<C> {
    /// The reference the server uses for "no object".
    pub const NULL: Ref<C> = Ref {
        id: Cow::Borrowed(NULL),
        _class: PhantomData,
    };

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            _class: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn into_string(self) -> String {
        self.id.into_owned()
    }

    /// Both `OpaqueRef:NULL` and the empty string mean no object.
    pub fn is_null(&self) -> bool {
        self.id.is_empty() || self.id == NULL
    }

    /// Reinterprets the id as a reference to another class.
    pub fn cast<D>(self) -> Ref<D> {
        Ref {
            id: self.id,
            _class: PhantomData,
        }
    }
}

impl<C> Clone for Ref<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            _class: PhantomData,
        }
    }
}

impl<C> PartialEq for Ref<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Ref<C> {}

impl<C> PartialOrd for Ref<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for Ref<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<C> Hash for Ref<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl<C> Default for Ref<C> {
    fn default() -> Self {
        Self::NULL
    }
}

impl<C: Class> fmt::Debug for Ref<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", C::NAME, self.id)
    }
}

impl<C> fmt::Display for Ref<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl<C> From<&str> for Ref<C> {
    fn from(id: &str) -> Self {
        Ref::new(id)
    }
}

impl<C> From<String> for Ref<C> {
    fn from(id: String) -> Self {
        Ref::new(id)
    }
}

impl<C> AsRef<str> for Ref<C> {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl<C> ToValue for Ref<C> {
    fn to_value(&self, _context: &str) -> Result<Value, Error> {
        Ok(Value::String(self.id.to_string()))
    }
}

impl<C> FromValue for Ref<C> {
    fn from_value(context: &str, value: &Value) -> Result<Self, Error> {
        expect_str(context, value).map(Ref::new)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    enum Host {}

    impl Class for Host {
        const NAME: &'static str = "host";
    }

    type HostRef = Ref<Host>;

    #[test]
    fn null() {
        assert_eq!(HostRef::new("OpaqueRef:NULL"), HostRef::NULL);
        assert!(HostRef::NULL.is_null());
        assert!(HostRef::new("").is_null());
        assert!(HostRef::default().is_null());
        assert!(!HostRef::new("OpaqueRef:4e2a").is_null());
    }

    #[test]
    fn equality_is_by_id() {
        let a = HostRef::new("OpaqueRef:a");
        let set = [a.clone(), HostRef::from("OpaqueRef:a"), HostRef::from("OpaqueRef:b")]
            .into_iter()
            .collect::<HashSet<_>>();

        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
        assert!(a < HostRef::new("OpaqueRef:b"));
    }

    #[test]
    fn formatting() {
        let r = HostRef::new("OpaqueRef:a");

        assert_eq!(r.to_string(), "OpaqueRef:a");
        assert_eq!(format!("{r:?}"), "host(OpaqueRef:a)");
    }

    #[test]
    fn marshal() {
        let value = HostRef::new("OpaqueRef:a").to_value("ctx").unwrap();
        assert_eq!(value, Value::from("OpaqueRef:a"));

        let back = HostRef::from_value("ctx", &value).unwrap();
        assert_eq!(back.as_str(), "OpaqueRef:a");

        let err = HostRef::from_value("host.get_all -> [1]", &Value::Int(3)).unwrap_err();
        assert_eq!(err.to_string(), "host.get_all -> [1]: expected string, got int");
    }
}

use std::fmt;

/// Stable tag identifying one kind of owner entity in the host system.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct OwnerType(String);

impl OwnerType {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for OwnerType {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for OwnerType {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<OwnerType> for String {
    fn from(from: OwnerType) -> Self {
        from.0
    }
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric identifier of an owner entity within its type.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct OwnerId(u64);

impl From<u64> for OwnerId {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<OwnerId> for u64 {
    fn from(from: OwnerId) -> Self {
        from.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Polymorphic reference to an arbitrary entity in the host system.
#[rustfmt::skip]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct OwnerRef {
    pub owner_type : OwnerType,
    pub owner_id   : OwnerId,
}

impl OwnerRef {
    pub fn new(owner_type: impl Into<OwnerType>, owner_id: impl Into<OwnerId>) -> Self {
        Self {
            owner_type: owner_type.into(),
            owner_id: owner_id.into(),
        }
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.owner_type, self.owner_id)
    }
}

/// Implemented by host entities that comments can attach to.
pub trait OwnerEntity {
    fn owner_type() -> OwnerType
    where
        Self: Sized;

    fn owner_id(&self) -> OwnerId;

    fn owner_ref(&self) -> OwnerRef
    where
        Self: Sized,
    {
        OwnerRef::new(Self::owner_type(), self.owner_id())
    }
}

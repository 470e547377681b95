use std::fmt;

/// Identifier of a registered user in the host identity system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(u64);

impl From<u64> for UserId {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<UserId> for u64 {
    fn from(from: UserId) -> Self {
        from.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

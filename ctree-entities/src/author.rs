use crate::{email::EmailAddress, user::UserId};
use url::Url;

/// Inline identity for comments left without a registered account.
///
/// Only the name is mandatory.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymousAuthor {
    pub name    : String,
    pub website : Option<Url>,
    pub email   : Option<EmailAddress>,
}

/// Who wrote a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Author {
    Registered(UserId),
    Anonymous(AnonymousAuthor),
}

impl Author {
    pub fn anonymous(name: impl Into<String>) -> Self {
        Self::Anonymous(AnonymousAuthor {
            name: name.into(),
            website: None,
            email: None,
        })
    }

    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }
}

impl From<UserId> for Author {
    fn from(from: UserId) -> Self {
        Self::Registered(from)
    }
}

impl From<AnonymousAuthor> for Author {
    fn from(from: AnonymousAuthor) -> Self {
        Self::Anonymous(from)
    }
}

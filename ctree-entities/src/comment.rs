use std::{fmt, net::IpAddr};

use crate::{author::*, id::*, markup::*, owner::*, time::*};

/// A single threaded comment attached to an owner entity.
///
/// Hierarchy comes from the nullable `parent_id` self-reference; a comment
/// without a parent is a root. `id` and `owner_ref` are fixed at creation,
/// every other field may change on a later write.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id           : Id,
    pub owner_ref    : OwnerRef,
    pub parent_id    : Option<Id>,
    pub author       : Author,
    pub body         : String,
    pub markup       : MarkupKind,
    pub is_public    : bool,
    pub is_approved  : bool,
    pub submitted_at : Timestamp,
    pub modified_at  : Timestamp,
    pub approved_at  : Option<Timestamp>,
    pub ip_address   : Option<IpAddr>,
}

impl Comment {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// A comment is publicly visible if it has been published or approved.
    pub fn is_visible(&self) -> bool {
        self.is_public || self.is_approved
    }

    /// Bookkeeping before the record hits the store: refreshes the
    /// modification time and stamps the approval time exactly once.
    pub fn stamp_for_save(&mut self, now: Timestamp) {
        self.modified_at = now;
        if self.approved_at.is_none() && self.is_approved {
            self.approved_at = Some(now);
        }
    }

    /// Body excerpt for log output and list views.
    pub fn excerpt(&self) -> String {
        const EXCERPT_CHARS: usize = 50;
        let mut chars = self.body.chars();
        let excerpt: String = chars.by_ref().take(EXCERPT_CHARS).collect();
        if chars.next().is_some() {
            return excerpt + "...";
        }
        excerpt
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.excerpt())
    }
}

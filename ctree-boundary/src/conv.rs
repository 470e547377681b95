use ctree_entities as e;

use super::*;

impl CommentData {
    /// Snapshot of a comment; timestamps are included on demand.
    pub fn from_comment(from: &e::comment::Comment, include_timestamps: bool) -> Self {
        Self {
            id: from.id.to_string(),
            owner_type: from.owner_ref.owner_type.as_str().to_owned(),
            owner_id: from.owner_ref.owner_id.into(),
            parent: from.parent_id.as_ref().map(ToString::to_string),
            author: AuthorData::from(&from.author),
            body: from.body.clone(),
            markup: from.markup.to_string(),
            is_public: from.is_public,
            is_approved: from.is_approved,
            ip_address: from.ip_address.map(|ip| ip.to_string()),
            submitted_at: include_timestamps.then(|| from.submitted_at.as_millis()),
            modified_at: include_timestamps.then(|| from.modified_at.as_millis()),
            approved_at: if include_timestamps {
                from.approved_at.map(e::time::Timestamp::as_millis)
            } else {
                None
            },
        }
    }
}

impl From<&e::comment::Comment> for CommentData {
    fn from(from: &e::comment::Comment) -> Self {
        Self::from_comment(from, true)
    }
}

impl From<&e::author::Author> for AuthorData {
    fn from(from: &e::author::Author) -> Self {
        use e::author::Author::*;
        match from {
            Registered(user_id) => Self::Registered {
                user_id: (*user_id).into(),
            },
            Anonymous(anonymous) => Self::Anonymous {
                name: anonymous.name.clone(),
                website: anonymous.website.as_ref().map(ToString::to_string),
                email: anonymous.email.as_ref().map(|email| email.as_str().to_owned()),
            },
        }
    }
}

use std::net::IpAddr;

use super::prelude::*;

/// Parameters for a new comment.
///
/// Unset fields fall back to the store defaults: public, unapproved,
/// plaintext markup.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub parent_id: Option<Id>,
    pub author: Author,
    pub body: String,
    pub markup: Option<MarkupKind>,
    pub is_public: Option<bool>,
    pub is_approved: Option<bool>,
    pub ip_address: Option<IpAddr>,
}

impl NewComment {
    fn into_comment(self, owner_ref: OwnerRef, now: Timestamp) -> Result<Comment> {
        let Self {
            parent_id,
            author,
            body,
            markup,
            is_public,
            is_approved,
            ip_address,
        } = self;
        if let Author::Anonymous(anonymous) = &author {
            if anonymous.name.trim().is_empty() {
                return Err(Error::EmptyAuthorName);
            }
        }
        let mut comment = Comment {
            id: Id::new(),
            owner_ref,
            parent_id,
            author,
            body,
            markup: markup.unwrap_or_default(),
            is_public: is_public.unwrap_or(true),
            is_approved: is_approved.unwrap_or(false),
            submitted_at: now,
            modified_at: now,
            approved_at: None,
            ip_address,
        };
        comment.stamp_for_save(now);
        Ok(comment)
    }
}

/// Stamps the owner reference onto the given field set and inserts a new
/// comment record.
pub fn create_comment_for_owner<R>(
    repo: &R,
    owner_ref: &OwnerRef,
    new_comment: NewComment,
) -> Result<Comment>
where
    R: CommentRepository,
{
    let comment = new_comment.into_comment(owner_ref.clone(), Timestamp::now())?;
    log::debug!("Creating comment {} for owner {}", comment.id, owner_ref);
    repo.create_comment(comment.clone())?;
    Ok(comment)
}

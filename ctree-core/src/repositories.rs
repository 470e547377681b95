// Low-level store access traits.
// A repository is responsible for a single entity and its relationships.
// Related entities are only referenced by their id.

use std::io;

use thiserror::Error;

use crate::entities::{comment::Comment, id::Id, owner::OwnerRef};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("More than one object matched the query")]
    MultipleResults,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Restriction on the hierarchy position of a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentFilter {
    /// Only comments without a parent.
    Root,
    /// Only direct children of the given comment.
    ChildOf(Id),
}

/// Visibility gate layered on top of any other query restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// No restriction; for moderation views.
    #[default]
    All,
    /// Only comments that are public or have been approved.
    Public,
}

impl Visibility {
    pub fn matches(self, comment: &Comment) -> bool {
        match self {
            Self::All => true,
            Self::Public => comment.is_visible(),
        }
    }
}

/// Composable restrictions for comment queries.
///
/// All set fields must match. `visibility` narrows the result further,
/// it never replaces the other restrictions.
#[derive(Debug, Clone, Default)]
pub struct CommentQuery {
    pub id: Option<Id>,
    pub owner: Option<OwnerRef>,
    pub parent: Option<ParentFilter>,
    pub visibility: Visibility,
}

impl CommentQuery {
    pub fn owned_by(owner: OwnerRef) -> Self {
        Self {
            owner: Some(owner),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        let Self {
            id,
            owner,
            parent,
            visibility,
        } = self;
        id.is_none() && owner.is_none() && parent.is_none() && *visibility == Visibility::All
    }

    pub fn matches(&self, comment: &Comment) -> bool {
        if let Some(id) = &self.id {
            if id != &comment.id {
                return false;
            }
        }
        if let Some(owner) = &self.owner {
            if owner != &comment.owner_ref {
                return false;
            }
        }
        match &self.parent {
            Some(ParentFilter::Root) if !comment.is_root() => return false,
            Some(ParentFilter::ChildOf(parent_id))
                if comment.parent_id.as_ref() != Some(parent_id) =>
            {
                return false
            }
            _ => (),
        }
        self.visibility.matches(comment)
    }
}

pub trait CommentRepository {
    /// Fails with `AlreadyExists` if the id is already taken.
    fn create_comment(&self, comment: Comment) -> Result<()>;

    /// Replaces the mutable fields of a stored comment.
    ///
    /// `id` and `owner_ref` never change after creation; callers must pass
    /// them through unmodified. Two writers racing on the first approval of
    /// the same comment may both observe an unset approval time; hosts that
    /// need a stronger guarantee have to wrap the read-modify-write in a
    /// transaction of their own store.
    fn update_comment(&self, comment: &Comment) -> Result<()>;

    fn load_comment(&self, id: &Id) -> Result<Comment>;

    /// Results are ordered by submission time; ties keep insertion order.
    fn query_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>>;

    fn count_comments(&self, query: &CommentQuery) -> Result<usize> {
        Ok(self.query_comments(query)?.len())
    }
}

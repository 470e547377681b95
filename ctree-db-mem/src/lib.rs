#![cfg_attr(test, deny(warnings))]

//! # ctree-db-mem
//!
//! In-memory implementation of the commentree repositories.
//!
//! A single-threaded reference store for tests, demos and hosts that
//! bring their own persistence layer. Records live in insertion order;
//! queries are answered in submission order as the repository contract
//! requires.

use std::cell::RefCell;

use itertools::Itertools as _;

use ctree_core::repositories::{CommentQuery, CommentRepository, Error};
use ctree_entities::{comment::Comment, id::Id};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
pub struct MemoryRepo {
    comments: RefCell<Vec<Comment>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommentRepository for MemoryRepo {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        let mut comments = self.comments.borrow_mut();
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(Error::AlreadyExists);
        }
        comments.push(comment);
        Ok(())
    }

    fn update_comment(&self, comment: &Comment) -> Result<()> {
        let mut comments = self.comments.borrow_mut();
        let pos = comments
            .iter()
            .position(|c| c.id == comment.id)
            .ok_or(Error::NotFound)?;
        debug_assert_eq!(comments[pos].owner_ref, comment.owner_ref);
        comments[pos] = comment.clone();
        Ok(())
    }

    fn load_comment(&self, id: &Id) -> Result<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn query_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|comment| query.matches(comment))
            .cloned()
            .sorted_by_key(|comment| comment.submitted_at)
            .collect())
    }
}

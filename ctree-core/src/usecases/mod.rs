mod build_comment_tree;
mod create_comment;
mod error;
mod get_comment;
mod get_or_create_comment;
mod update_comment;

#[cfg(test)]
pub mod tests;

pub use self::{
    build_comment_tree::*, create_comment::*, error::Error, get_comment::*,
    get_or_create_comment::*, update_comment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{author::*, comment::*, id::*, markup::*, owner::*, time::*},
        repositories::{
            CommentQuery, CommentRepository, Error as RepoError, Visibility,
        },
        tree::{comment_tree, CommentNode},
    };
}

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::comment_builder::*;

pub mod comment_builder {

    use std::net::IpAddr;

    use super::*;
    use crate::{author::*, comment::*, id::*, markup::*, owner::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn owner(mut self, owner_type: &str, owner_id: u64) -> Self {
            self.comment.owner_ref = OwnerRef::new(owner_type, owner_id);
            self
        }
        pub fn parent(mut self, id: &str) -> Self {
            self.comment.parent_id = Some(id.into());
            self
        }
        pub fn author(mut self, author: impl Into<Author>) -> Self {
            self.comment.author = author.into();
            self
        }
        pub fn body(mut self, body: &str) -> Self {
            self.comment.body = body.into();
            self
        }
        pub fn markup(mut self, markup: MarkupKind) -> Self {
            self.comment.markup = markup;
            self
        }
        pub fn public(mut self, is_public: bool) -> Self {
            self.comment.is_public = is_public;
            self
        }
        pub fn approved(mut self, is_approved: bool) -> Self {
            self.comment.is_approved = is_approved;
            self
        }
        pub fn submitted_at(mut self, at: Timestamp) -> Self {
            self.comment.submitted_at = at;
            self.comment.modified_at = at;
            self
        }
        pub fn ip_address(mut self, ip: IpAddr) -> Self {
            self.comment.ip_address = Some(ip);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            let now = Timestamp::now();
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    owner_ref: OwnerRef::new("", 0u64),
                    parent_id: None,
                    author: Author::anonymous("anonymous"),
                    body: "".into(),
                    markup: MarkupKind::default(),
                    is_public: true,
                    is_approved: false,
                    submitted_at: now,
                    modified_at: now,
                    approved_at: None,
                    ip_address: None,
                },
            }
        }
    }
}

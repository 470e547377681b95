use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub type MarkupKindPrimitive = i16;

/// How a comment body is meant to be rendered.
///
/// The discriminants are stable storage values; 4 is reserved.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, Display, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MarkupKind {
    Markdown         = 1,
    Textile          = 2,
    RestructuredText = 3,
    #[default]
    Plaintext        = 5,
}

#[derive(Debug, Error)]
#[error("Invalid markup kind primitive: {0}")]
pub struct InvalidMarkupKindPrimitive(MarkupKindPrimitive);

impl TryFrom<MarkupKindPrimitive> for MarkupKind {
    type Error = InvalidMarkupKindPrimitive;
    fn try_from(from: MarkupKindPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidMarkupKindPrimitive(from))
    }
}

impl From<MarkupKind> for MarkupKindPrimitive {
    fn from(from: MarkupKind) -> Self {
        from.to_i16().expect("markup kind primitive")
    }
}

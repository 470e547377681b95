#![cfg_attr(test, deny(warnings))]

//! # ctree-core
//!
//! Business logic of commentree: repository abstractions, owner
//! resolution and the threaded-comment usecases.

pub use ctree_entities as entities;

pub mod repositories;
pub mod resolve;
pub mod tree;
pub mod usecases;

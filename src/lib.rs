// https://stackoverflow.com/a/61417700
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod layer;
mod service;

/// Entity tags and conditional responses.
pub mod etag;

pub use {layer::*, service::*};

/// The default digest for entity tags.
pub use sha1::Sha1;

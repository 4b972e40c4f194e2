mod dto;
mod entity;
mod error;
mod magazines_repository;
mod magazines_repository_impl;

pub use dto::*;
pub use error::*;
pub use magazines_repository::*;
pub use magazines_repository_impl::*;

mod dto;
mod magazines_service;
mod magazines_service_impl;

pub use dto::*;
pub use magazines_service::*;
pub use magazines_service_impl::*;

mod pagination;

pub use pagination::*;

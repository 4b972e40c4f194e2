mod magazine;
mod page;

pub use magazine::*;
pub use page::*;

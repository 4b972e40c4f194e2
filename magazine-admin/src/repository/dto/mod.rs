mod magazine;

pub use magazine::*;

mod magazine_find_entity;

pub use magazine_find_entity::*;

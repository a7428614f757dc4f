pub mod arena;
pub mod grade;
pub mod prospect;
pub mod render;

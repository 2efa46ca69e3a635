pub mod point;
pub mod line;
pub mod rect;

pub mod check;
pub mod intro;
pub mod item;
pub mod tree;

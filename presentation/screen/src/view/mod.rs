pub mod render;
pub mod sink;

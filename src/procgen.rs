pub mod draw;
pub mod robot;
pub mod tile;

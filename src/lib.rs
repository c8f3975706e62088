pub mod debugging;
pub mod shapes;

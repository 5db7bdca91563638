pub mod error;
pub mod frame;
pub mod math;
pub mod path;
pub mod shapes;
pub mod turtle;
pub mod types;

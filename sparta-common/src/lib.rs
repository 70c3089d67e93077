pub mod fibonacci;
pub mod model;

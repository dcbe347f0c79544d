pub mod model;
pub mod seed;
pub mod store;

pub mod compositor;
pub mod ease;
pub mod layer;
pub mod sample;

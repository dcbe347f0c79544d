pub mod mode;
pub mod recipe;

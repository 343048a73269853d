pub mod estimate;
pub mod filter;
pub mod todo;

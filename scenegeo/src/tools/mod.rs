pub mod filter;
pub mod project;

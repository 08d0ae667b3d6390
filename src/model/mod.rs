pub mod config;
pub mod convert;
pub mod extract;
pub mod node;
pub mod performance;
pub mod tree_view;
pub mod walk;

pub mod node;
pub mod property;

pub mod scheduler;
pub mod selector;

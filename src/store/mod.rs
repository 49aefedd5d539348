pub mod json_store;
pub mod schema;
pub mod word_store;

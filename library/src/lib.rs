pub mod books;
pub mod catalog;
pub mod core;
pub mod favorites;
pub mod server;
pub mod utils;

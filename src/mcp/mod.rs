pub mod handler;
pub mod protocol;
pub mod schema;
pub mod server;
pub mod tools;

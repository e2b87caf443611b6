pub mod account;
pub mod block;
pub mod cluster;
pub mod token;
pub mod transaction;

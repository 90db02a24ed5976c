pub mod connection;
pub mod initializer;

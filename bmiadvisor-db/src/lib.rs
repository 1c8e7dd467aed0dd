pub mod calculation;
pub mod connection;

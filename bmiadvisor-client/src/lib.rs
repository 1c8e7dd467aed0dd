mod client;
pub mod report;

pub use client::*;

pub mod advisor;
pub mod cli;
pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod server;
pub mod session;
pub mod storage;
pub mod types;

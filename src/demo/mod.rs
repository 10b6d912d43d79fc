//! Demo-session simulation of the backend: an in-memory seed store plus a
//! route table that fabricates responses shaped like the real API.

pub mod routes;
pub mod store;

pub use store::DemoStore;

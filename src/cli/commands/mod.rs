pub mod advisor;
pub mod auth;
pub mod bucket;
pub mod summary;
pub mod transaction;

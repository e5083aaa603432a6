pub mod aggregate;
pub mod fetcher;
pub mod summary;

//! Route handlers for the server-rendered site.

pub mod pages;

pub use pages::router;

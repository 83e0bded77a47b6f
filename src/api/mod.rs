//! HTTP surface over the registry
//!
//! The registry itself is synchronous; every route serializes access
//! through one `RwLock` around the whole `Hospital` so that cross-record
//! operations stay atomic from the caller's point of view.

pub mod rest;

//! Remote pair store access.
//!
//! The store is the authoritative home of the collection; everything in
//! here is a thin typed wrapper over its REST endpoints.

pub mod client;

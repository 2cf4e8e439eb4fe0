//! Key-value storage area for persisted blobs.
//!
//! # Responsibility
//! - Define the string-keyed storage contract stores persist through.
//! - Provide SQLite-backed and in-process implementations.
//!
//! # Invariants
//! - `set_item` replaces the whole value stored under a key.
//! - Storage never interprets blob contents.

pub mod kv;
pub mod memory_kv;
pub mod sqlite_kv;

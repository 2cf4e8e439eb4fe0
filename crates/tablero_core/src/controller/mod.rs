//! Form controllers that feed user input into stores.
//!
//! # Invariants
//! - Controllers receive the store they update at construction; there is no
//!   ambient/global store lookup.

pub mod modal;

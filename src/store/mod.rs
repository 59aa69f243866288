//! Document store access
//!
//! This module wraps the external key-value store used to cache the fetched
//! dataset. Documents are whole JSON values stored under a single key; each
//! write replaces the previous document and reads of a missing key yield
//! `None` rather than an error.

mod gateway;

pub use gateway::{StoreError, TermStore};

//! Core types shared across PatchLens facilities
//!
//! This crate provides the canonical schema constants used by the
//! logging facility and by tests asserting on captured log events.

pub mod schema;

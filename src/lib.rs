//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `core-service`, `core-media`). Host applications can
//! depend on `media-inventory-workspace` and enable the documented features
//! (`desktop-shims`, `android`, `media`) without needing to wire each
//! crate individually.

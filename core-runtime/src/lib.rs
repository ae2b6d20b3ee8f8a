//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the media inventory core:
//! - Logging and tracing infrastructure
//! - Configuration management with fail-fast capability checks
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the service crates depend
//! on. It establishes the logging conventions and the way bridge capabilities
//! are injected and validated before any query runs.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

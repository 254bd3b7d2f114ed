//! UI components for interactive mode
//!
//! This module contains reusable UI components for the interactive interface.

pub mod header;

pub use header::PortalHeader;

//! Interactive portal implementation

pub mod app;
pub mod components;
pub mod keys;
pub mod pages;

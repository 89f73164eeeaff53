//! topiclens-web — Dashboard and pipeline triggers for topiclens.
//!
//! Serves:
//!   - The topic map: document scatter plot plus topic table
//!   - Per-document detail pages
//!   - GET trigger endpoints that enqueue pipeline tasks

pub mod config;
pub mod error;
pub mod handlers;
pub mod plot;
pub mod router;
pub mod state;

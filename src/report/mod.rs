//! Startup report module - Layout and composition of the startup banner.
//!
//! This module handles:
//! - Rendering each block of the report (banner, development notice,
//!   monitorables, ignored notice, running-at footer)
//! - Composing the blocks into the full report and writing it out
//! - Exporting the same information as JSON
//!
//! Status classification lives in the status module; terminal emphasis
//! is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `layout` - One function per report block, exact spacing
//! - `render` - Full report composition and output
//! - `export` - JSON export

mod export;
mod layout;
mod render;

// Re-export output entry points
pub use export::write_json_report;
pub use render::print_startup_report;

//! Tree line formatting
//!
//! - `config` - Output configuration types
//! - `streaming` - Formatter that writes each line as the walk discovers it

mod config;
mod streaming;

pub use config::OutputConfig;
pub use streaming::TreeFormatter;

//! whisper-banner - transient notification banners
//!
//! A whisper is a short banner that slides in, optionally counts down, and
//! slides out again. At most one whisper is live at a time; showing another
//! supersedes it. A separate alert subsystem presents confirmations that may
//! trigger a follow-up whisper.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Whisper lifecycle reducer, value objects, config and errors
//! - **Application**: Controller runtime, host coordinator and port traits
//! - **Infrastructure**: Adapter implementations (config file, renderers)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

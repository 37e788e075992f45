#![forbid(unsafe_code)]

//! Core domain model and business logic for the fitstat workout
//! statistics system.
//!
//! This crate provides:
//! - Domain types (workout records, training summaries)
//! - Packet registry and dispatch
//! - Per-kind distance / speed / calorie formulas
//! - Report formatting and rendering (text, json, csv)

pub mod types;
pub mod error;
pub mod registry;
pub mod report;
pub mod packet;
pub mod render;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::Workout;
pub use registry::{known_tags, read_packet};
pub use report::TrainingSummary;
pub use packet::{load_packets, sample_packets, Packet};
pub use render::{render, ReportFormat};
pub use config::Config;

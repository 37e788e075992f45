//! Sensor packet input.
//!
//! A packet is the raw `(workout_type, data)` pair a sensor hands over
//! before it is decoded into a typed workout record. Batches can be
//! loaded from a JSON file or taken from the built-in sample batch.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One raw sensor record, not yet decoded
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Packet {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Packet {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Load a batch of packets from a JSON array file
///
/// The file order is preserved; it becomes the output order downstream.
pub fn load_packets(path: &Path) -> Result<Vec<Packet>> {
    let contents = std::fs::read_to_string(path)?;
    let packets: Vec<Packet> = serde_json::from_str(&contents)?;
    tracing::info!("Loaded {} packets from {:?}", packets.len(), path);
    Ok(packets)
}

/// Built-in sample batch, used when no packets file is given
pub fn sample_packets() -> Vec<Packet> {
    vec![
        Packet::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Packet::new("RUN", vec![15_000.0, 1.0, 75.0]),
        Packet::new("WLK", vec![9_000.0, 1.0, 75.0, 180.0]),
    ]
}

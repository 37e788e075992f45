//! Workout packet registry and dispatch.
//!
//! Maps the three-letter workout tag carried by a sensor packet to the
//! record shape it encodes, checks the payload arity, and constructs the
//! typed [`Workout`].

use crate::{Error, Result, Workout};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shape of one packet kind: expected payload length and constructor
struct PacketSpec {
    arity: usize,
    build: fn(&[f64]) -> Workout,
}

/// Static tag table - built once and reused across all packets
static REGISTRY: Lazy<HashMap<&'static str, PacketSpec>> = Lazy::new(|| {
    let mut registry = HashMap::new();

    // SWM: action, duration, weight, pool_length, lap_count
    registry.insert(
        "SWM",
        PacketSpec {
            arity: 5,
            build: |data| Workout::Swimming {
                action: data[0] as u32,
                duration_h: data[1],
                weight_kg: data[2],
                pool_length_m: data[3],
                lap_count: data[4],
            },
        },
    );

    // RUN: action, duration, weight
    registry.insert(
        "RUN",
        PacketSpec {
            arity: 3,
            build: |data| Workout::Running {
                action: data[0] as u32,
                duration_h: data[1],
                weight_kg: data[2],
            },
        },
    );

    // WLK: action, duration, weight, height
    registry.insert(
        "WLK",
        PacketSpec {
            arity: 4,
            build: |data| Workout::Walking {
                action: data[0] as u32,
                duration_h: data[1],
                weight_kg: data[2],
                height_cm: data[3],
            },
        },
    );

    registry
});

/// The workout tags the registry recognizes, sorted
pub fn known_tags() -> Vec<&'static str> {
    let mut tags: Vec<_> = REGISTRY.keys().copied().collect();
    tags.sort_unstable();
    tags
}

/// Decode one sensor packet into a validated workout record
///
/// Fails on an unrecognized tag, on a payload whose length doesn't match
/// the tag's field count, and on values that violate the domain
/// invariants. No partial record is ever produced.
pub fn read_packet(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let spec = REGISTRY
        .get(workout_type)
        .ok_or_else(|| Error::UnknownWorkoutType(workout_type.to_string()))?;

    if data.len() != spec.arity {
        return Err(Error::PacketArity {
            workout_type: workout_type.to_string(),
            expected: spec.arity,
            got: data.len(),
        });
    }

    // Action count is payload field 0 for every packet kind. Rejecting a
    // negative value here keeps the u32 cast from clamping it to zero.
    if data[0] < 0.0 {
        return Err(Error::Validation(format!(
            "action count must be non-negative, got {}",
            data[0]
        )));
    }

    let workout = (spec.build)(data);
    workout.validate()?;

    tracing::debug!("Decoded {} packet into {:?}", workout_type, workout);
    Ok(workout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_run_packet() {
        let workout = read_packet("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
        assert_eq!(
            workout,
            Workout::Running {
                action: 15_000,
                duration_h: 1.0,
                weight_kg: 75.0,
            }
        );
    }

    #[test]
    fn test_read_wlk_packet() {
        let workout = read_packet("WLK", &[9_000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            workout,
            Workout::Walking {
                action: 9_000,
                duration_h: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            }
        );
    }

    #[test]
    fn test_read_swm_packet() {
        let workout = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            workout,
            Workout::Swimming {
                action: 720,
                duration_h: 1.0,
                weight_kg: 80.0,
                pool_length_m: 25.0,
                lap_count: 40.0,
            }
        );
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let err = read_packet("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::UnknownWorkoutType(ref tag) if tag == "XYZ"));
    }

    #[test]
    fn test_short_payload_is_an_arity_error() {
        let err = read_packet("RUN", &[15_000.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::PacketArity {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_long_payload_is_an_arity_error() {
        let err = read_packet("WLK", &[9_000.0, 1.0, 75.0, 180.0, 5.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::PacketArity {
                expected: 4,
                got: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_payload_is_an_arity_error() {
        assert!(matches!(
            read_packet("SWM", &[]).unwrap_err(),
            Error::PacketArity { expected: 5, got: 0, .. }
        ));
    }

    #[test]
    fn test_negative_action_is_rejected() {
        let err = read_packet("RUN", &[-5.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        assert!(read_packet("RUN", &[15_000.0, 0.0, 75.0]).is_err());
        assert!(read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 0.0]).is_err());
    }

    #[test]
    fn test_known_tags() {
        assert_eq!(known_tags(), vec!["RUN", "SWM", "WLK"]);
    }
}

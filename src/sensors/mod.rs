//! Sensor subsystem.
//!
//! The analog front-end itself is an external collaborator behind
//! [`SensorPort`](crate::app::ports::SensorPort); this module holds the
//! pure conversion from its raw samples to temperatures.

pub mod thermistor;

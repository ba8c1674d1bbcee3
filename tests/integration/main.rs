//! Integration test driver for `tests/integration/` submodule.
//!
//! Exercises the full monitor loop against scripted mock adapters — no
//! terminal, sensor, wall clock, or real sleeping involved.

mod mock_ports;

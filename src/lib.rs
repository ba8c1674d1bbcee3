//! ThermoWatch library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All host I/O (stdin, stdout, log file, signals, wall clock)
//! lives behind the adapters in [`adapters`]; the application core in
//! [`app`] never touches it directly.

#![deny(unused_must_use)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod sensors;

pub mod adapters;

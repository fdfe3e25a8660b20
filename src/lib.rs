//! `biblebelt`: church finder and ministry widgets for a small-town
//! community site, as a command-line tool.
//!
//! DESIGN
//! ======
//! Pure logic lives in the `finder` and `widgets` crates. This crate adds
//! the edges: environment config, HTTP clients for the geocoder and
//! Overpass, the async search service, the printable plan export, and the
//! CLI that ties them to file-backed storage.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod locate;
pub mod services;
pub mod state;

//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types and aggregates
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions and the aggregate folds
//! - `request.rs` — Request builders and the bodies they serialize to
//! - `client.rs` — Sub-client with HTTP methods

pub mod edis;
pub mod funds;
pub mod holding;
pub mod market;
pub mod order;
pub mod position;
pub mod profile;
pub mod trade;

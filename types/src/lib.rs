//! Fundamental types for the Canopy gossip overlay.
//!
//! This crate defines the types shared across every other crate in the
//! workspace — currently the node identifier used to address peers and
//! committee members.

pub mod error;
pub mod node_id;

pub use error::NodeIdError;
pub use node_id::NodeId;

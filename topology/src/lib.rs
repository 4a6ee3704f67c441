//! Tree-structured broadcast topology for the Canopy gossip layer.
//!
//! The ordered committee list is treated as the breadth-first layout of a
//! complete N-ary tree: a node's position in the list *is* its tree
//! coordinate. [`TreeTopology`] answers one question — given the peers we
//! can currently reach, which of them should receive a forward from us —
//! by walking that implicit tree downward (forward targets) and upward
//! (one return path), falling back around unreachable nodes.

pub mod config;
pub mod error;
pub mod layout;
pub mod topology;

pub use config::TopologyConfig;
pub use error::TopologyError;
pub use layout::TreeLayout;
pub use topology::TreeTopology;

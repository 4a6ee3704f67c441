//! Network node identifier.

use crate::error::NodeIdError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte identifier for a network participant.
///
/// In the surrounding system this is derived from the node's public key;
/// within this workspace it is an opaque, equality-comparable token. Two
/// nodes agree on committee ordering by comparing these values, never by
/// inspecting their contents.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId([u8; 32]);

impl NodeId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, NodeIdError> {
        if s.len() != 64 {
            return Err(NodeIdError::InvalidLength(s.len()));
        }
        let bytes = hex::decode(s).map_err(|e| NodeIdError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| NodeIdError::InvalidLength(s.len()))?;
        Ok(Self(arr))
    }

    /// Full lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Shortened form for log lines: the first 4 bytes in hex.
    pub fn abridged(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.abridged())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

use proptest::prelude::*;

use canopy_types::NodeId;

proptest! {
    /// NodeId roundtrip: new -> as_bytes -> new produces identical id.
    #[test]
    fn node_id_bytes_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = NodeId::new(bytes);
        prop_assert_eq!(id.as_bytes(), &bytes);
    }

    /// NodeId hex roundtrip: to_hex -> from_hex is the identity.
    #[test]
    fn node_id_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = NodeId::new(bytes);
        let parsed = NodeId::from_hex(&id.to_hex()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// NodeId bincode serialization roundtrip.
    #[test]
    fn node_id_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = NodeId::new(bytes);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: NodeId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// Abridged form is a prefix of the full hex encoding.
    #[test]
    fn node_id_abridged_prefix(bytes in prop::array::uniform32(0u8..)) {
        let id = NodeId::new(bytes);
        prop_assert!(id.to_hex().starts_with(&id.abridged()));
        prop_assert_eq!(id.abridged().len(), 8);
    }
}

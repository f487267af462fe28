// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod key_value_store;

pub use key_value_store::{
    get_json, set_json, KeyValueStore, SqliteKeyValueStore, StoredValue,
};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;

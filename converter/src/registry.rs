use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RegistryError;
use crate::json::JsonMessageCodec;
use crate::message::TypedMessage;
use crate::codec::MessageCodec;

/// Registry resolving wire type names and concrete types to their codecs.
///
/// Entries are added by explicit registration at process start, one per
/// message type, and retained for the registry's lifetime. Lookups and
/// first-inserts are safe from concurrent callers; a name or concrete type
/// can only ever be registered once. The handle is cheap to clone and is
/// injected into every converter that shares its type set.
#[derive(Clone)]
pub struct TypeRegistry {
  by_name: Arc<DashMap<String, Arc<dyn MessageCodec>>>,
  by_type: Arc<DashMap<TypeId, Arc<dyn MessageCodec>>>,
}

impl TypeRegistry {
  #[must_use]
  pub fn new() -> Self {
    Self {
      by_name: Arc::new(DashMap::new()),
      by_type: Arc::new(DashMap::new()),
    }
  }

  /// Registers `T` under the given fully qualified wire name with the
  /// default JSON codec.
  pub fn register<T>(&self, type_name: &str) -> Result<(), RegistryError>
  where
    T: TypedMessage + Serialize + DeserializeOwned, {
    self.register_codec(Arc::new(JsonMessageCodec::<T>::new(type_name)))
  }

  /// Registers a custom codec implementation.
  pub fn register_codec(&self, codec: Arc<dyn MessageCodec>) -> Result<(), RegistryError> {
    let type_name = codec.type_name().to_string();
    match self.by_name.entry(type_name.clone()) {
      Entry::Occupied(_) => return Err(RegistryError::DuplicateEntry(type_name)),
      Entry::Vacant(vacant) => {
        vacant.insert(codec.clone());
      }
    }
    match self.by_type.entry(codec.type_id()) {
      Entry::Occupied(_) => {
        self.by_name.remove(&type_name);
        return Err(RegistryError::DuplicateEntry(type_name));
      }
      Entry::Vacant(vacant) => {
        vacant.insert(codec);
      }
    }
    tracing::debug!("registered wire type: [{}]", type_name);
    Ok(())
  }

  /// Resolves a codec by its registered wire name.
  #[must_use]
  pub fn resolve(&self, type_name: &str) -> Option<Arc<dyn MessageCodec>> {
    self.by_name.get(type_name).map(|entry| entry.value().clone())
  }

  /// Resolves a codec by the concrete type it handles.
  #[must_use]
  pub fn resolve_type_id(&self, type_id: TypeId) -> Option<Arc<dyn MessageCodec>> {
    self.by_type.get(&type_id).map(|entry| entry.value().clone())
  }
}

impl Default for TypeRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl Debug for TypeRegistry {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let mut names = self.by_name.iter().map(|entry| entry.key().clone()).collect::<Vec<_>>();
    names.sort();
    f.debug_struct("TypeRegistry").field("types", &names).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
  struct Ping {
    seq: u64,
  }

  impl TypedMessage for Ping {
    fn type_name(&self) -> &'static str {
      "tests.Ping"
    }

    fn eq_message(&self, other: &dyn TypedMessage) -> bool {
      other.as_any().downcast_ref::<Ping>().is_some_and(|o| self == o)
    }

    fn as_any(&self) -> &(dyn std::any::Any + Send + Sync + 'static) {
      self
    }
  }

  #[test]
  fn registers_and_resolves_codec() {
    let registry = TypeRegistry::new();
    registry.register::<Ping>("tests.Ping").expect("register");

    let codec = registry.resolve("tests.Ping").expect("resolve by name");
    assert_eq!(codec.type_name(), "tests.Ping");
    assert_eq!(codec.type_id(), TypeId::of::<Ping>());

    let by_type = registry.resolve_type_id(TypeId::of::<Ping>()).expect("resolve by type");
    assert_eq!(by_type.type_name(), "tests.Ping");
  }

  #[test]
  fn resolution_is_idempotent() {
    let registry = TypeRegistry::new();
    registry.register::<Ping>("tests.Ping").expect("register");

    let first = registry.resolve("tests.Ping").expect("first");
    let second = registry.resolve("tests.Ping").expect("second");
    assert!(Arc::ptr_eq(&first, &second));
  }

  #[test]
  fn rejects_duplicate_name() {
    let registry = TypeRegistry::new();
    registry.register::<Ping>("tests.Ping").expect("register");

    let err = registry.register::<Ping>("tests.Ping").expect_err("duplicate");
    assert!(matches!(err, RegistryError::DuplicateEntry(name) if name == "tests.Ping"));
  }

  #[test]
  fn rejects_same_type_under_second_name() {
    let registry = TypeRegistry::new();
    registry.register::<Ping>("tests.Ping").expect("register");

    let err = registry.register::<Ping>("tests.PingAlias").expect_err("duplicate type");
    assert!(matches!(err, RegistryError::DuplicateEntry(name) if name == "tests.PingAlias"));
    assert!(registry.resolve("tests.PingAlias").is_none());
  }

  #[test]
  fn concurrent_registration_yields_single_entry() {
    let registry = TypeRegistry::new();
    let successes = std::thread::scope(|scope| {
      let handles = (0..8)
        .map(|_| scope.spawn(|| registry.register::<Ping>("tests.Ping").is_ok()))
        .collect::<Vec<_>>();
      handles
        .into_iter()
        .map(|handle| handle.join().expect("join"))
        .filter(|registered| *registered)
        .count()
    });
    assert_eq!(successes, 1);
    assert!(registry.resolve("tests.Ping").is_some());
    assert!(registry.resolve_type_id(TypeId::of::<Ping>()).is_some());
  }
}

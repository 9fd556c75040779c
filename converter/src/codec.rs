use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::config::UnknownFieldPolicy;
use crate::error::ConversionError;
use crate::message::TypedMessage;

/// Erased per-type codec held by the registry.
///
/// One implementation exists per registered message type; the registry keys
/// entries both by wire name and by [`TypeId`] so encode and decode each
/// resolve in a single lookup.
pub trait MessageCodec: Send + Sync {
  /// Registered wire name of the handled type.
  fn type_name(&self) -> &str;

  /// [`TypeId`] of the handled concrete type.
  fn type_id(&self) -> TypeId;

  /// Serializes the value behind the erased reference into payload bytes.
  fn serialize_any(&self, msg: &(dyn Any + Send + Sync)) -> Result<Vec<u8>, ConversionError>;

  /// Parses payload bytes into a fresh instance of the handled type.
  fn deserialize_message(
    &self,
    bytes: &[u8],
    policy: UnknownFieldPolicy,
  ) -> Result<Arc<dyn TypedMessage>, ConversionError>;
}

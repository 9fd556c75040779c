use std::sync::Arc;

use crate::config::ConverterConfig;
use crate::envelope::{HeaderMap, WireEnvelope, TYPE_NAME_HEADER};
use crate::error::ConversionError;
use crate::message::TypedMessage;
use crate::registry::TypeRegistry;

/// Converter between typed messages and JSON wire envelopes.
///
/// `to_wire` serializes a message to UTF-8 JSON and stamps the
/// [`TYPE_NAME_HEADER`] into the caller-supplied header map; `from_wire`
/// resolves the header back to a registered type and parses the payload into
/// a fresh instance. Every type crossing either direction must have been
/// registered in the injected [`TypeRegistry`] beforehand.
///
/// Both operations are synchronous, side-effect free beyond building their
/// result, and safe to call from multiple threads.
#[derive(Debug, Clone)]
pub struct JsonConverter {
  registry: TypeRegistry,
  config: ConverterConfig,
}

impl JsonConverter {
  /// Creates a converter with the default configuration (unknown JSON
  /// fields are rejected).
  #[must_use]
  pub fn new(registry: TypeRegistry) -> Self {
    Self::with_config(registry, ConverterConfig::default())
  }

  #[must_use]
  pub fn with_config(registry: TypeRegistry, config: ConverterConfig) -> Self {
    Self { registry, config }
  }

  pub fn get_registry(&self) -> &TypeRegistry {
    &self.registry
  }

  pub fn get_config(&self) -> &ConverterConfig {
    &self.config
  }

  /// Converts a message into a wire envelope.
  ///
  /// The header map is taken over and mutated, not copied: whatever entries
  /// the host framework already placed in it travel with the envelope, plus
  /// the [`TYPE_NAME_HEADER`] entry written here.
  pub fn to_wire(&self, message: &dyn TypedMessage, mut headers: HeaderMap) -> Result<WireEnvelope, ConversionError> {
    let codec = self
      .registry
      .resolve_type_id(message.as_any().type_id())
      .ok_or_else(|| ConversionError::UnsupportedType {
        type_name: message.type_name().to_string(),
      })?;
    tracing::debug!("handling message with type: [{}]", codec.type_name());
    let payload = codec.serialize_any(message.as_any())?;
    tracing::debug!("serialized body: {}", String::from_utf8_lossy(&payload));
    headers.insert(TYPE_NAME_HEADER.to_string(), codec.type_name().to_string());
    Ok(WireEnvelope::new(payload).with_headers(headers))
  }

  /// Converts a wire envelope back into the typed message it declares.
  pub fn from_wire(&self, envelope: &WireEnvelope) -> Result<Arc<dyn TypedMessage>, ConversionError> {
    let type_name = envelope.type_name().ok_or(ConversionError::MissingTypeHeader)?;
    tracing::debug!("deserializing message with type: [{}]", type_name);
    let codec = self
      .registry
      .resolve(type_name)
      .ok_or_else(|| ConversionError::UnknownType {
        type_name: type_name.to_string(),
      })?;
    codec.deserialize_message(&envelope.payload, self.config.get_unknown_field_policy())
  }
}

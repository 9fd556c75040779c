use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::UnknownFieldPolicy;
use crate::error::ConversionError;
use crate::message::TypedMessage;
use crate::codec::MessageCodec;

/// JSON codec for a single message type.
///
/// Encoding downcasts the erased reference to `T` and serializes through
/// serde's standard JSON mapping. Decoding requires the payload to be valid
/// UTF-8 text; unrecognized fields are rejected or ignored according to the
/// policy supplied per call.
pub struct JsonMessageCodec<T> {
  type_name: String,
  _phantom: PhantomData<T>,
}

impl<T> JsonMessageCodec<T>
where
  T: TypedMessage + Serialize + DeserializeOwned, {
  pub fn new(type_name: impl Into<String>) -> Self {
    Self {
      type_name: type_name.into(),
      _phantom: PhantomData,
    }
  }
}

impl<T> MessageCodec for JsonMessageCodec<T>
where
  T: TypedMessage + Serialize + DeserializeOwned, {
  fn type_name(&self) -> &str {
    &self.type_name
  }

  fn type_id(&self) -> TypeId {
    TypeId::of::<T>()
  }

  fn serialize_any(&self, msg: &(dyn Any + Send + Sync)) -> Result<Vec<u8>, ConversionError> {
    msg
      .downcast_ref::<T>()
      .ok_or_else(|| ConversionError::UnsupportedType {
        type_name: self.type_name.clone(),
      })
      .and_then(|m| serde_json::to_vec(m).map_err(|e| ConversionError::Serialization(e.to_string())))
  }

  fn deserialize_message(
    &self,
    bytes: &[u8],
    policy: UnknownFieldPolicy,
  ) -> Result<Arc<dyn TypedMessage>, ConversionError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ConversionError::Deserialization(e.to_string()))?;
    let message: T = match policy {
      UnknownFieldPolicy::Ignore => {
        serde_json::from_str(text).map_err(|e| ConversionError::Deserialization(e.to_string()))?
      }
      UnknownFieldPolicy::Reject => {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        let mut unknown: Option<String> = None;
        let message = serde_ignored::deserialize(&mut deserializer, |path| {
          if unknown.is_none() {
            unknown = Some(path.to_string());
          }
        })
        .map_err(|e| ConversionError::Deserialization(e.to_string()))?;
        deserializer
          .end()
          .map_err(|e| ConversionError::Deserialization(e.to_string()))?;
        if let Some(path) = unknown {
          return Err(ConversionError::Deserialization(format!(
            "unrecognized field {} for type {}",
            path, self.type_name
          )));
        }
        message
      }
    };
    Ok(Arc::new(message) as Arc<dyn TypedMessage>)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
  struct Probe {
    value: i32,
  }

  impl TypedMessage for Probe {
    fn type_name(&self) -> &'static str {
      "tests.Probe"
    }

    fn eq_message(&self, other: &dyn TypedMessage) -> bool {
      other.as_any().downcast_ref::<Probe>().is_some_and(|o| self == o)
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static) {
      self
    }
  }

  #[test]
  fn serialize_any_rejects_foreign_type() {
    let codec = JsonMessageCodec::<Probe>::new("tests.Probe");
    let err = codec.serialize_any(&"not a probe".to_string()).expect_err("foreign type");
    assert!(matches!(err, ConversionError::UnsupportedType { type_name } if type_name == "tests.Probe"));
  }

  #[test]
  fn reject_policy_fails_on_unknown_field() {
    let codec = JsonMessageCodec::<Probe>::new("tests.Probe");
    let err = codec
      .deserialize_message(br#"{"value":1,"extra":true}"#, UnknownFieldPolicy::Reject)
      .expect_err("unknown field");
    assert!(matches!(err, ConversionError::Deserialization(msg) if msg.contains("extra")));
  }

  #[test]
  fn ignore_policy_drops_unknown_field() {
    let codec = JsonMessageCodec::<Probe>::new("tests.Probe");
    let message = codec
      .deserialize_message(br#"{"value":1,"extra":true}"#, UnknownFieldPolicy::Ignore)
      .expect("ignore policy");
    let probe = message.as_any().downcast_ref::<Probe>().expect("downcast");
    assert_eq!(probe.value, 1);
  }

  #[test]
  fn non_utf8_payload_is_a_deserialization_error() {
    let codec = JsonMessageCodec::<Probe>::new("tests.Probe");
    let err = codec
      .deserialize_message(&[0xff, 0xfe, 0x7b], UnknownFieldPolicy::Reject)
      .expect_err("invalid utf-8");
    assert!(matches!(err, ConversionError::Deserialization(_)));
  }

  #[test]
  fn trailing_garbage_is_rejected() {
    let codec = JsonMessageCodec::<Probe>::new("tests.Probe");
    let err = codec
      .deserialize_message(br#"{"value":1} trailing"#, UnknownFieldPolicy::Reject)
      .expect_err("trailing garbage");
    assert!(matches!(err, ConversionError::Deserialization(_)));
  }
}

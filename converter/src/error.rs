use thiserror::Error;

/// Failure kinds raised at the encode/decode boundary.
///
/// Underlying serde errors are carried as strings so callers never depend on
/// the serialization library's error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
  /// The value's type is not registered for wire conversion.
  #[error("type {type_name} is not registered for wire conversion")]
  UnsupportedType { type_name: String },
  /// The envelope declares a type name absent from the registry.
  #[error("unknown wire type {type_name}")]
  UnknownType { type_name: String },
  /// The envelope carries no type-name header.
  #[error("wire envelope is missing the type-name header")]
  MissingTypeHeader,
  #[error("serialization failed: {0}")]
  Serialization(String),
  #[error("deserialization failed: {0}")]
  Deserialization(String),
}

/// Errors raised while populating a type registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
  /// The name or concrete type has already been registered.
  #[error("wire type {0} already registered")]
  DuplicateEntry(String),
}

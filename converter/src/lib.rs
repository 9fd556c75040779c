//! Conversion between typed in-memory messages and JSON wire envelopes.
//!
//! The crate plugs into a messaging framework's serialization slot: outbound
//! messages are serialized to UTF-8 JSON and tagged with an `X-Type` header
//! carrying their fully qualified type name; inbound envelopes are resolved
//! back to their concrete type through an explicitly populated
//! [`TypeRegistry`].

pub mod codec;
pub mod config;
pub mod config_option;
pub mod converter;
pub mod envelope;
pub mod error;
pub mod json;
pub mod message;
pub mod registry;

pub use codec::MessageCodec;
pub use config::{ConverterConfig, UnknownFieldPolicy};
pub use config_option::ConverterOption;
pub use converter::JsonConverter;
pub use envelope::{HeaderMap, WireEnvelope, TYPE_NAME_HEADER};
pub use error::{ConversionError, RegistryError};
pub use json::JsonMessageCodec;
pub use message::TypedMessage;
pub use registry::TypeRegistry;

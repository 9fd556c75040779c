use std::collections::HashMap;

/// Header key carrying the fully qualified type name of the payload.
pub const TYPE_NAME_HEADER: &str = "X-Type";

/// String-keyed header map exchanged with the host framework.
pub type HeaderMap = HashMap<String, String>;

/// Header-plus-body unit handed to and received from the transport layer.
///
/// After encoding, the headers contain a [`TYPE_NAME_HEADER`] entry equal to
/// the registered type name of the payload, and the payload is UTF-8 JSON
/// for that type's fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireEnvelope {
  /// Metadata headers. Insertion order is irrelevant.
  pub headers: HeaderMap,
  /// Raw payload bytes.
  pub payload: Vec<u8>,
}

impl WireEnvelope {
  /// Constructs an envelope with the provided payload and no headers.
  #[must_use]
  pub fn new(payload: Vec<u8>) -> Self {
    Self {
      headers: HeaderMap::new(),
      payload,
    }
  }

  /// Replaces the header map wholesale.
  #[must_use]
  pub fn with_headers(mut self, headers: HeaderMap) -> Self {
    self.headers = headers;
    self
  }

  /// Adds a single header entry.
  #[must_use]
  pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.insert(key.into(), value.into());
    self
  }

  /// Updates a header entry in place.
  pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
    self.headers.insert(key.into(), value.into());
  }

  /// Looks up a header value.
  #[must_use]
  pub fn header(&self, key: &str) -> Option<&str> {
    self.headers.get(key).map(String::as_str)
  }

  /// The declared type name of the payload, when present.
  #[must_use]
  pub fn type_name(&self) -> Option<&str> {
    self.header(TYPE_NAME_HEADER)
  }
}

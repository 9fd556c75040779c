use crate::config_option::ConverterOption;

/// Treatment of JSON fields that do not map to any declared field of the
/// target type during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
  /// Fail the conversion on the first unrecognized field.
  #[default]
  Reject,
  /// Drop unrecognized fields and keep decoding.
  Ignore,
}

/// Converter settings, built from a list of [`ConverterOption`]s.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
  unknown_field_policy: UnknownFieldPolicy,
}

impl ConverterConfig {
  pub fn from(options: impl IntoIterator<Item = ConverterOption>) -> ConverterConfig {
    let mut config = ConverterConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  pub fn get_unknown_field_policy(&self) -> UnknownFieldPolicy {
    self.unknown_field_policy
  }

  pub fn set_unknown_field_policy(&mut self, policy: UnknownFieldPolicy) {
    self.unknown_field_policy = policy;
  }
}

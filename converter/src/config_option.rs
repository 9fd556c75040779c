use crate::config::{ConverterConfig, UnknownFieldPolicy};

/// Single configuration directive applied while building a
/// [`ConverterConfig`].
#[derive(Debug, Clone)]
pub enum ConverterOption {
  SetUnknownFieldPolicy(UnknownFieldPolicy),
}

impl ConverterOption {
  pub fn apply(&self, config: &mut ConverterConfig) {
    match self {
      ConverterOption::SetUnknownFieldPolicy(policy) => {
        config.set_unknown_field_policy(*policy);
      }
    }
  }

  pub fn with_unknown_field_policy(policy: UnknownFieldPolicy) -> ConverterOption {
    ConverterOption::SetUnknownFieldPolicy(policy)
  }
}

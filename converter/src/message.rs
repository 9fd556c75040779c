use std::any::Any;
use std::fmt::Debug;

/// Capability implemented by every message that can cross the wire.
///
/// A concrete type reports exactly one fully qualified name, and the name
/// must be stable across processes: the receiving side resolves it through
/// its own registry to rebuild the value.
pub trait TypedMessage: Debug + Send + Sync + 'static {
  /// Fully qualified wire name of this message type, e.g. `examples.Order`.
  fn type_name(&self) -> &'static str;

  /// Structural equality across trait objects.
  fn eq_message(&self, other: &dyn TypedMessage) -> bool;

  fn as_any(&self) -> &(dyn Any + Send + Sync + 'static);
}

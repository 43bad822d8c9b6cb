//! Deep-equality comparators consumed by `Optional::equals`

use serde::Serialize;

/// Decides whether two payloads are structurally equivalent.
pub trait DeepEqual<T: ?Sized> {
    /// `true` when `left` and `right` are equivalent.
    fn deep_equal(&self, left: &T, right: &T) -> bool;
}

/// Structural equality through `PartialEq`.
///
/// Derived `PartialEq` already recurses into nested collections and nested
/// `Optional`s, which is what `equals` uses by default.
///
/// Floats follow IEEE comparison, so a `NaN` payload is never equal to
/// another `NaN`. Inject a closure comparator where `NaN` must match itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialEqComparator;

impl<T: PartialEq + ?Sized> DeepEqual<T> for PartialEqComparator {
    fn deep_equal(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Structural equality of the serialized JSON trees.
///
/// Useful for payloads without a `PartialEq` impl. Values that fail to
/// serialize never compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonComparator;

impl<T: Serialize + ?Sized> DeepEqual<T> for JsonComparator {
    fn deep_equal(&self, left: &T, right: &T) -> bool {
        match (serde_json::to_value(left), serde_json::to_value(right)) {
            (Ok(left), Ok(right)) => left == right,
            (Err(e), _) | (_, Err(e)) => {
                tracing::debug!(error = %e, "payload not serializable; treating as unequal");
                false
            }
        }
    }
}

impl<T: ?Sized, F> DeepEqual<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn deep_equal(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

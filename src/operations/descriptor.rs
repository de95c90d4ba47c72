//! Operation descriptors and runtime hash overrides.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::operations::registry::PersistedOperation;

/// Static metadata for one persisted-query operation.
///
/// A descriptor names the operation, pins its persisted-query hash, and says
/// where its payload lives inside the response envelope. The type parameter
/// is the result shape the payload is mapped into.
///
/// Descriptors are `const`-constructible so they can live in statics.
///
/// # Example
///
/// ```rust
/// use psn_store_api::operations::OperationDescriptor;
/// use psn_store_api::types::Product;
///
/// const PRODUCT: OperationDescriptor<Product> = OperationDescriptor::new(
///     "metGetProductById",
///     "a128042177bd93dd831164103d53b73ef790d56f51dae647064cb8f9d9fc9d1a",
///     "data.productRetrieve",
/// );
///
/// assert_eq!(PRODUCT.name(), "metGetProductById");
/// assert_eq!(PRODUCT.data_path(), "data.productRetrieve");
/// ```
pub struct OperationDescriptor<T> {
    name: &'static str,
    hash: &'static str,
    data_path: &'static str,
    shape: PhantomData<fn() -> T>,
}

impl<T> OperationDescriptor<T> {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(name: &'static str, hash: &'static str, data_path: &'static str) -> Self {
        Self {
            name,
            hash,
            data_path,
            shape: PhantomData,
        }
    }

    /// Creates a descriptor for a known persisted operation, using its
    /// built-in hash.
    #[must_use]
    pub const fn persisted(operation: PersistedOperation, data_path: &'static str) -> Self {
        Self::new(operation.name(), operation.default_hash(), data_path)
    }

    /// Returns the operation name sent as `operationName`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the built-in persisted-query hash.
    #[must_use]
    pub const fn hash(&self) -> &'static str {
        self.hash
    }

    /// Returns the dotted path to the payload, e.g. `data.productRetrieve`.
    #[must_use]
    pub const fn data_path(&self) -> &'static str {
        self.data_path
    }

    /// Returns the type name of the result shape.
    #[must_use]
    pub fn result_shape(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

// Implemented by hand so `T` needs no bounds; no `T` is stored.
impl<T> Clone for OperationDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OperationDescriptor<T> {}

impl<T> PartialEq for OperationDescriptor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.hash == other.hash && self.data_path == other.data_path
    }
}

impl<T> Eq for OperationDescriptor<T> {}

impl<T> Hash for OperationDescriptor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.hash.hash(state);
        self.data_path.hash(state);
    }
}

impl<T> fmt::Debug for OperationDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationDescriptor")
            .field("name", &self.name)
            .field("hash", &self.hash)
            .field("data_path", &self.data_path)
            .field("result_shape", &self.result_shape())
            .finish()
    }
}

/// A typed request for one persisted operation.
///
/// The implementing type's serde representation is the `variables` object
/// sent on the wire, so it must serialize to a JSON object (or to unit/null
/// for operations without variables). `Output` is the result shape the
/// payload at [`OperationDescriptor::data_path`] is mapped into.
///
/// # Implementing an operation
///
/// ```rust
/// use psn_store_api::operations::{Operation, OperationDescriptor};
/// use psn_store_api::types::Concept;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "camelCase")]
/// struct ConceptByIdV2 {
///     concept_id: String,
/// }
///
/// impl Operation for ConceptByIdV2 {
///     type Output = Concept;
///
///     const DESCRIPTOR: OperationDescriptor<Concept> = OperationDescriptor::new(
///         "metGetConceptById",
///         "cc90404ac049d935afbd9968aef523da2b6723abfb9d586e5f77ebf7c5289006",
///         "data.conceptRetrieve",
///     );
/// }
/// ```
pub trait Operation: Serialize + Send + Sync {
    /// The result shape.
    type Output: DeserializeOwned + Default + Send;

    /// Static metadata for this operation.
    const DESCRIPTOR: OperationDescriptor<Self::Output>;
}

/// Runtime replacements for persisted-query hashes, keyed by operation name.
///
/// The persisted-query store can retire a hash independently of this
/// library's releases; an override patches the hash without a rebuild.
/// Overrides are never validated. Setting the same name twice replaces the
/// earlier value (last write wins).
///
/// # Thread Safety
///
/// All methods take `&self`; the table is guarded by an `RwLock`, so a client
/// shared between tasks can be patched while requests are in flight. A request
/// resolves its hash once, before it is sent.
///
/// # Example
///
/// ```rust
/// use psn_store_api::operations::{HashOverrides, OperationDescriptor};
/// use psn_store_api::types::Product;
///
/// let descriptor: OperationDescriptor<Product> =
///     OperationDescriptor::new("metGetProductById", "builtin", "data.productRetrieve");
///
/// let overrides = HashOverrides::new();
/// assert_eq!(overrides.resolve(&descriptor), "builtin");
///
/// overrides.set("metGetProductById", "patched");
/// assert_eq!(overrides.resolve(&descriptor), "patched");
/// ```
#[derive(Debug, Default)]
pub struct HashOverrides {
    entries: RwLock<HashMap<String, String>>,
}

// Verify HashOverrides is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HashOverrides>();
};

impl HashOverrides {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the override for `operation_name`.
    pub fn set(&self, operation_name: impl Into<String>, hash: impl Into<String>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(operation_name.into(), hash.into());
    }

    /// Returns the override for `operation_name`, if any.
    #[must_use]
    pub fn get(&self, operation_name: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(operation_name)
            .cloned()
    }

    /// Removes the override for `operation_name`, returning it.
    pub fn remove(&self, operation_name: &str) -> Option<String> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(operation_name)
    }

    /// Returns the number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the hash to send for `descriptor`: the override if one is
    /// set, else the descriptor's built-in hash.
    #[must_use]
    pub fn resolve<T>(&self, descriptor: &OperationDescriptor<T>) -> String {
        let operation = descriptor.name();
        if let Some(hash) = self.get(operation) {
            tracing::info!(
                operation,
                hash = %hash,
                "Using overridden SHA-256 hash for operation"
            );
            hash
        } else {
            tracing::debug!(
                operation,
                hash = descriptor.hash(),
                "Using default SHA-256 hash for operation"
            );
            descriptor.hash().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    const DESCRIPTOR: OperationDescriptor<Product> =
        OperationDescriptor::new("metGetProductById", "builtin_hash", "data.productRetrieve");

    #[test]
    fn test_persisted_descriptor_uses_registry_values() {
        let descriptor: OperationDescriptor<Product> =
            OperationDescriptor::persisted(PersistedOperation::ProductById, "data.productRetrieve");

        assert_eq!(descriptor.name(), "metGetProductById");
        assert_eq!(
            descriptor.hash(),
            PersistedOperation::ProductById.default_hash()
        );
    }

    #[test]
    fn test_descriptor_debug_names_result_shape() {
        let debug = format!("{DESCRIPTOR:?}");
        assert!(debug.contains("metGetProductById"));
        assert!(debug.contains("Product"));
    }

    #[test]
    fn test_resolve_without_override_returns_builtin() {
        let overrides = HashOverrides::new();
        assert_eq!(overrides.resolve(&DESCRIPTOR), "builtin_hash");
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_setting_same_override_twice_is_idempotent() {
        let once = HashOverrides::new();
        once.set("metGetProductById", "h1");

        let twice = HashOverrides::new();
        twice.set("metGetProductById", "h1");
        twice.set("metGetProductById", "h1");

        assert_eq!(once.resolve(&DESCRIPTOR), twice.resolve(&DESCRIPTOR));
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_new_override_replaces_previous() {
        let overrides = HashOverrides::new();
        overrides.set("metGetProductById", "h1");
        overrides.set("metGetProductById", "h2");

        assert_eq!(overrides.resolve(&DESCRIPTOR), "h2");
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_override_for_other_operation_is_ignored() {
        let overrides = HashOverrides::new();
        overrides.set("metGetConceptById", "other");

        assert_eq!(overrides.resolve(&DESCRIPTOR), "builtin_hash");
    }

    #[test]
    fn test_override_is_not_validated() {
        let overrides = HashOverrides::new();
        overrides.set("metGetProductById", "");

        assert_eq!(overrides.resolve(&DESCRIPTOR), "");
    }

    #[test]
    fn test_remove_restores_builtin() {
        let overrides = HashOverrides::new();
        overrides.set("metGetProductById", "h1");

        assert_eq!(overrides.remove("metGetProductById").as_deref(), Some("h1"));
        assert_eq!(overrides.resolve(&DESCRIPTOR), "builtin_hash");
    }

    #[test]
    fn test_overrides_shared_across_threads() {
        let overrides = std::sync::Arc::new(HashOverrides::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let overrides = std::sync::Arc::clone(&overrides);
                std::thread::spawn(move || overrides.set(format!("op{i}"), "h"))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(overrides.len(), 4);
    }
}

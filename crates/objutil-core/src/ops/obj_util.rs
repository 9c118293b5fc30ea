use std::fmt;
use std::sync::Arc;

use super::diff_ops::{self, Diff, PropertyNames};
use super::key_ops::{self, KeyOptions};
use super::{pick_ops, plain_ops};
use crate::capability::KeySetFactory;
use crate::errors::Result;
use crate::model::{Mapping, PlainMap, Value};
use crate::{log_op_end, log_op_error, log_op_start};

/// The object utilities bundled with their key-set collaborator
///
/// The collaborator starts unset. Register it once during startup; every
/// later `pick` on a rich mapping uses it. Registration takes `&mut self`,
/// so it cannot race a `pick` on the same component.
///
/// # Example
/// ```
/// use objutil_core::capability::HashKeySetFactory;
/// use objutil_core::model::{FrozenMap, Mapping};
/// use objutil_core::ObjUtil;
///
/// let mut util = ObjUtil::new();
/// util.register_key_set_factory(HashKeySetFactory);
///
/// let props = Mapping::rich(FrozenMap::new().insert("a", 1).insert("b", 2));
/// let picked = util.pick(Some(&props), &["a"]).unwrap().unwrap();
/// assert_eq!(picked.own_keys(), vec!["a"]);
/// ```
#[derive(Clone, Default)]
pub struct ObjUtil {
    key_sets: Option<Arc<dyn KeySetFactory>>,
}

impl ObjUtil {
    /// Component without a key-set factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ObjUtil::register_key_set_factory`]
    pub fn with_key_set_factory<F: KeySetFactory + 'static>(mut self, factory: F) -> Self {
        self.register_key_set_factory(factory);
        self
    }

    /// Set the key-set factory; the last registration wins
    pub fn register_key_set_factory<F: KeySetFactory + 'static>(&mut self, factory: F) {
        self.register_shared_key_set_factory(Arc::new(factory));
    }

    /// Set an already shared key-set factory
    pub fn register_shared_key_set_factory(&mut self, factory: Arc<dyn KeySetFactory>) {
        let replaced = self.key_sets.replace(factory).is_some();
        tracing::debug!(op = "register_key_set_factory", replaced);
    }

    pub fn has_key_set_factory(&self) -> bool {
        self.key_sets.is_some()
    }

    /// See [`diff_ops::diff`]
    pub fn diff(
        &self,
        a: Option<&Mapping>,
        b: Option<&Mapping>,
        names: Option<PropertyNames>,
    ) -> Diff {
        diff_ops::diff(a, b, names)
    }

    /// See [`key_ops::values`]
    pub fn values(&self, obj: &Mapping) -> Vec<Value> {
        key_ops::values(obj)
    }

    /// See [`key_ops::keys`]
    pub fn keys(&self, obj: &Mapping, options: &KeyOptions) -> Vec<String> {
        key_ops::keys(obj, options)
    }

    /// See [`key_ops::rest`]
    pub fn rest(&self, obj: &Mapping, options: &KeyOptions) -> PlainMap {
        key_ops::rest(obj, options)
    }

    /// [`pick_ops::pick`] using the registered key-set factory
    ///
    /// # Errors
    /// * `CollaboratorNotRegistered` - `obj` is rich, `keys` is non-empty and
    ///   no factory has been registered
    pub fn pick(&self, obj: Option<&Mapping>, keys: &[&str]) -> Result<Option<Mapping>> {
        let mapping_kind = obj.map_or("absent", Mapping::kind);
        log_op_start!("pick", mapping_kind = mapping_kind, key_count = keys.len());
        let start = std::time::Instant::now();

        let result = pick_ops::pick(obj, keys, self.key_sets.as_deref()).map_err(|e| {
            log_op_error!(
                "pick",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!("pick", duration_ms = start.elapsed().as_millis() as u64);

        Ok(result)
    }

    /// See [`plain_ops::to_plain_deep`]
    pub fn to_plain_deep(&self, value: &Value) -> Value {
        plain_ops::to_plain_deep(value)
    }
}

impl fmt::Debug for ObjUtil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjUtil")
            .field("key_set_factory_registered", &self.has_key_set_factory())
            .finish()
    }
}

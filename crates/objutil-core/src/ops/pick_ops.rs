use crate::capability::KeySetFactory;
use crate::errors::{ObjUtilError, Result};
use crate::model::{Mapping, PlainMap, Value};

/// New mapping with only the requested keys, richness preserved
///
/// # Arguments
/// * `obj` - Source mapping; `None` yields `Ok(None)`
/// * `keys` - Keys to keep; empty means "everything" (shallow clone)
/// * `key_sets` - Factory used to filter rich mappings by key
///
/// Plain results follow the order of `keys`; keys `obj` lacks are skipped.
///
/// # Errors
/// * `CollaboratorNotRegistered` - `obj` is rich, `keys` is non-empty and no
///   `key_sets` factory was supplied
pub fn pick(
    obj: Option<&Mapping>,
    keys: &[&str],
    key_sets: Option<&dyn KeySetFactory>,
) -> Result<Option<Mapping>> {
    let Some(obj) = obj else {
        return Ok(None);
    };

    if keys.is_empty() {
        return Ok(Some(shallow_clone(obj)));
    }

    match obj {
        Mapping::Rich(rich) => {
            let factory = key_sets.ok_or_else(|| ObjUtilError::CollaboratorNotRegistered {
                op: "pick".to_string(),
            })?;
            let key_set = factory.key_set(keys);
            let picked = rich.filter_entries(&|k: &str, _: &Value| key_set.has(k));
            Ok(Some(Mapping::Rich(picked)))
        }
        Mapping::Plain(map) => {
            let picked: PlainMap = keys
                .iter()
                .filter_map(|k| map.get(*k).map(|v| ((*k).to_string(), v.clone())))
                .collect();
            Ok(Some(Mapping::plain(picked)))
        }
    }
}

/// Same entries behind a new handle
fn shallow_clone(obj: &Mapping) -> Mapping {
    match obj {
        Mapping::Plain(map) => Mapping::plain(map.as_ref().clone()),
        Mapping::Rich(rich) => Mapping::Rich(rich.shallow_clone()),
    }
}

//! get / has / set by resolved path

use serde_json::Value;

use super::{PathSegment, PathWriteError, ResolvedPath};

fn child<'a>(value: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match value {
        Value::Object(map) => match segment {
            PathSegment::Key(key) => map.get(key),
            PathSegment::Index(i) => map.get(&i.to_string()),
        },
        Value::Array(items) => items.get(segment.as_index()?),
        _ => None,
    }
}

fn child_mut<'a>(value: &'a mut Value, segment: &PathSegment) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => match segment {
            PathSegment::Key(key) => map.get_mut(key),
            PathSegment::Index(i) => map.get_mut(&i.to_string()),
        },
        Value::Array(items) => items.get_mut(segment.as_index()?),
        _ => None,
    }
}

/// Value at `path`, or `None` when any segment is absent
///
/// The empty path addresses the document itself.
pub fn get<'a>(doc: &'a Value, path: &ResolvedPath) -> Option<&'a Value> {
    get_at(doc, path.segments())
}

pub(crate) fn get_at<'a>(doc: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(doc, |current, segment| child(current, segment))
}

/// Mutable variant of [`get`]
pub fn get_mut<'a>(doc: &'a mut Value, path: &ResolvedPath) -> Option<&'a mut Value> {
    let mut current = doc;
    for segment in path.segments() {
        current = child_mut(current, segment)?;
    }
    Some(current)
}

/// True iff every segment, down to the last one, is directly present
///
/// Presence is structural: a key holding `null`, `false` or `""` is present.
pub fn has(doc: &Value, path: &ResolvedPath) -> bool {
    get(doc, path).is_some()
}

/// Assign `value` at `path`
///
/// Every segment except the last must already exist. The final segment is
/// inserted into a mapping (or overwritten), or overwrites an existing sequence
/// element. Sequences never grow. An empty path replaces the whole document.
pub fn set(doc: &mut Value, path: &ResolvedPath, value: Value) -> Result<(), PathWriteError> {
    let Some((last, parents)) = path.segments().split_last() else {
        *doc = value;
        return Ok(());
    };

    let mut current = doc;
    for segment in parents {
        if !matches!(current, Value::Object(_) | Value::Array(_)) {
            return Err(PathWriteError::NotAContainer {
                path: path.to_string(),
                segment: segment.to_string(),
            });
        }
        current = child_mut(current, segment).ok_or_else(|| PathWriteError::MissingSegment {
            path: path.to_string(),
            segment: segment.to_string(),
        })?;
    }

    match current {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            let len = items.len();
            match last.as_index().filter(|i| *i < len) {
                Some(i) => {
                    items[i] = value;
                    Ok(())
                }
                None => Err(PathWriteError::IndexOutOfBounds {
                    path: path.to_string(),
                    index: last.to_string(),
                    len,
                }),
            }
        }
        _ => Err(PathWriteError::NotAContainer {
            path: path.to_string(),
            segment: last.to_string(),
        }),
    }
}

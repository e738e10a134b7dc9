/// Structural equality between state snapshots.
///
/// Objects compare deeply and ignore key order. Arrays compare element by
/// element, in order. Scalars compare by value under the given `Strictness`.
use serde_json::{Map, Number, Value};
use undoredo_config::Strictness;

/// A state that can be stored in history.
///
/// `same_as` decides whether recording `self` after `other` would be a
/// no-op. Typed states usually forward to `PartialEq`.
pub trait Snapshot: Clone {
    fn same_as(&self, other: &Self, strictness: Strictness) -> bool;
}

impl Snapshot for Value {
    fn same_as(&self, other: &Self, strictness: Strictness) -> bool {
        structurally_equal(self, other, strictness)
    }
}

/// Compares two JSON values structurally. Pure; never allocates.
pub fn structurally_equal(a: &Value, b: &Value, strictness: Strictness) -> bool {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|(x, y)| structurally_equal(x, y, strictness))
        }
        (Value::Object(a), Value::Object(b)) => objects_equal(a, b, strictness),
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        _ => match strictness {
            Strictness::Strict => scalars_equal(a, b),
            Strictness::Loose => scalars_equal(a, b) || coerced_equal(a, b),
        },
    }
}

fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>, strictness: Strictness) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| {
            b.get(key)
                .is_some_and(|other| structurally_equal(value, other, strictness))
        })
}

fn scalars_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => a == b,
    }
}

/// `1` and `1.0` are the same number; integers only fall back to `f64`
/// when one side is a float, so large integers never collide.
fn numbers_equal(x: &Number, y: &Number) -> bool {
    if x == y {
        return true;
    }
    if x.is_f64() || y.is_f64() {
        return matches!((x.as_f64(), y.as_f64()), (Some(a), Some(b)) if a == b);
    }
    false
}

fn coerced_equal(a: &Value, b: &Value) -> bool {
    match (coerce_number(a), coerce_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Numeric view of a scalar for loose comparison. `null` never coerces.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

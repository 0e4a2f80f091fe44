use std::{cmp::Ordering, slice};

use crate::value::Value;

/// Three-way packet order.
///
/// Integers compare numerically and lists compare elementwise, falling back
/// to their lengths. When only one side is a list, the integer side is
/// treated as a single-element list.
pub(crate) fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::List(xs), Value::List(ys)) => compare_lists(xs, ys),
        (Value::Integer(_), Value::List(ys)) => compare_lists(slice::from_ref(a), ys),
        (Value::List(xs), Value::Integer(_)) => compare_lists(xs, slice::from_ref(b)),
    }
}

fn compare_lists(xs: &[Value], ys: &[Value]) -> Ordering {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| compare(x, y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| xs.len().cmp(&ys.len()))
}

/// `-1`, `0` or `1`. List length differences are normalized to their sign.
pub(crate) fn signum(a: &Value, b: &Value) -> i8 {
    compare(a, b) as i8
}

pub(crate) fn lt(a: &Value, b: &Value) -> bool {
    compare(a, b) == Ordering::Less
}

impl Value {
    pub fn compare(&self, other: &Value) -> Ordering {
        compare(self, other)
    }
}

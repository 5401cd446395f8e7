//! JSON-like value graph with shared container nodes.
//!
//! Unlike `serde_json::Value`, sequences and mappings are reference-counted
//! shared nodes, so a value graph can hold shared substructure and reference
//! cycles. The recursive transforms in this crate rely on node identity
//! (pointer equality of the shared allocation) to detect cycles.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A JSON-like value: a scalar, a sequence, or an ordered key/value mapping.
///
/// Scalars are copied by value and never recursed into. Numbers are `f64`
/// throughout, matching the source data model.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Rc<RefCell<Vec<Value>>>),
    Mapping(Rc<RefCell<Mapping>>),
}

/// An ordered collection of key/value pairs with unique keys.
///
/// Insertion order is preserved. Re-inserting an existing key replaces the
/// value in place, keeping the original position.
#[derive(Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

/// SameValueZero comparison: `NaN` equals `NaN`, otherwise IEEE equality.
pub fn same_value_zero(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

impl Value {
    /// Wrap a vector of elements as a shared sequence node.
    pub fn sequence(items: Vec<Value>) -> Value {
        Value::Sequence(Rc::new(RefCell::new(items)))
    }

    /// Wrap a mapping as a shared mapping node.
    pub fn mapping(mapping: Mapping) -> Value {
        Value::Mapping(Rc::new(RefCell::new(mapping)))
    }

    /// Identity of the shared allocation backing a container node.
    ///
    /// Scalars have no identity. Used by the recursive transforms to detect
    /// cycles; never a structural comparison.
    pub(crate) fn identity(&self) -> Option<usize> {
        match self {
            Value::Sequence(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Mapping(rc) => Some(Rc::as_ptr(rc) as usize),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<Rc<RefCell<Vec<Value>>>> {
        match self {
            Value::Sequence(rc) => Some(Rc::clone(rc)),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<Rc<RefCell<Mapping>>> {
        match self {
            Value::Mapping(rc) => Some(Rc::clone(rc)),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// Fails with [`Error::CyclicValue`] if the graph contains a reference
    /// cycle. Non-finite numbers become JSON null (the `JSON.stringify`
    /// convention).
    pub fn to_json(&self) -> Result<serde_json::Value> {
        let mut active = HashSet::new();
        self.to_json_guarded(&mut active)
    }

    fn to_json_guarded(&self, active: &mut HashSet<usize>) -> Result<serde_json::Value> {
        match self {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) => Ok(number_to_json(*n)),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Sequence(rc) => {
                let id = Rc::as_ptr(rc) as usize;
                if !active.insert(id) {
                    return Err(Error::CyclicValue);
                }
                let items = rc
                    .borrow()
                    .iter()
                    .map(|item| item.to_json_guarded(active))
                    .collect::<Result<Vec<_>>>()?;
                active.remove(&id);
                Ok(serde_json::Value::Array(items))
            }
            Value::Mapping(rc) => {
                let id = Rc::as_ptr(rc) as usize;
                if !active.insert(id) {
                    return Err(Error::CyclicValue);
                }
                let mut map = serde_json::Map::new();
                let mapping = rc.borrow();
                for (key, value) in mapping.iter() {
                    map.insert(key.clone(), value.to_json_guarded(active)?);
                }
                active.remove(&id);
                Ok(serde_json::Value::Object(map))
            }
        }
    }
}

// 2^53, the largest magnitude at which every integer is exact in an f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// Integer-valued numbers export as JSON integers so `json!(1)` survives a
// round trip (serde_json considers `1` and `1.0` unequal); everything else
// goes through `from_f64`, with non-finite numbers becoming JSON null (the
// `JSON.stringify` convention).
fn number_to_json(n: f64) -> serde_json::Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        return serde_json::Value::Number(serde_json::Number::from(n as i64));
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

/// Structural equality with SameValueZero number semantics.
///
/// Mapping comparison is entry-by-entry in insertion order; order
/// independence is not guaranteed. Comparing cyclic values is out of
/// contract and may not terminate.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => same_value_zero(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Mapping(a), Value::Mapping(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::mapping(value)
    }
}

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.to_json() {
            Ok(json) => json.serialize(serializer),
            Err(err) => Err(serde::ser::Error::custom(err.to_string())),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut active = HashSet::new();
        fmt_guarded(self, f, &mut active)
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut active = HashSet::new();
        fmt_mapping(self, f, &mut active)
    }
}

// Manual Debug keeps cyclic graphs printable (a derived impl would recurse
// forever inside assert_eq! failure output).
fn fmt_guarded(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    active: &mut HashSet<usize>,
) -> fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => write!(f, "{:?}", s),
        Value::Sequence(rc) => {
            let id = Rc::as_ptr(rc) as usize;
            if !active.insert(id) {
                return write!(f, "<cycle>");
            }
            write!(f, "[")?;
            for (i, item) in rc.borrow().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_guarded(item, f, active)?;
            }
            active.remove(&id);
            write!(f, "]")
        }
        Value::Mapping(rc) => {
            let id = Rc::as_ptr(rc) as usize;
            if !active.insert(id) {
                return write!(f, "<cycle>");
            }
            fmt_mapping(&rc.borrow(), f, active)?;
            active.remove(&id);
            Ok(())
        }
    }
}

fn fmt_mapping(
    mapping: &Mapping,
    f: &mut fmt::Formatter<'_>,
    active: &mut HashSet<usize>,
) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (key, value)) in mapping.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:?}: ", key)?;
        fmt_guarded(value, f, active)?;
    }
    write!(f, "}}")
}

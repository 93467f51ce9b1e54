//! Opaque view-tree values and structural equality.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Property map used by composite values. Insertion order is preserved and
/// significant: [`deep_equal`] walks properties in order.
pub type Props = IndexMap<String, Value>;

/// A node in the opaque data model consumed by the render host.
///
/// Trees are plain data except for [`Value::Action`], which carries a
/// callback the host invokes when the matching event fires.
#[derive(Clone)]
pub enum Value {
    Bool(bool),
    Num(f64),
    Str(String),
    Data(Vec<u8>),
    Array(Vec<Value>),
    Map(Props),
    Action(Rc<dyn Fn()>),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Num(_) => "number",
            Self::Str(_) => "string",
            Self::Data(_) => "data",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Action(_) => "action",
        }
    }

    /// Whether this value is a keyed composite. Arrays and primitives are
    /// not acceptable as sheet content.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(key),
            _ => None,
        }
    }

    pub fn index(&self, index: usize) -> Option<&Value> {
        match self {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Self::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_action(&self) -> Option<&Rc<dyn Fn()>> {
        match self {
            Self::Action(action) => Some(action),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => value.fmt(f),
            Self::Num(value) => value.fmt(f),
            Self::Str(value) => value.fmt(f),
            Self::Data(bytes) => write!(f, "<data {} bytes>", bytes.len()),
            Self::Array(items) => items.fmt(f),
            Self::Map(map) => f.debug_map().entries(map.iter()).finish(),
            Self::Action(_) => write!(f, "<action>"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Num(a), Self::Num(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Data(a), Self::Data(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Actions compare by identity, like the closures they wrap.
            (Self::Action(a), Self::Action(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Data(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Props> for Value {
    fn from(map: Props) -> Self {
        Self::Map(map)
    }
}

/// Structural equality over composite values, kept verdict-compatible with
/// the comparator this crate replaces.
///
/// Keyed composites compare key counts first, then walk `a`'s properties in
/// order. Array-valued properties recurse per index over `a`'s elements;
/// anything missing on `b`'s side is unequal rather than a panic. The first
/// property holding a keyed composite decides the *entire* comparison — the
/// remaining properties are never visited. That short-circuit is pinned by
/// `composite_property_decides_the_comparison` below; do not fix it without
/// migrating callers.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Map(a_map), Value::Map(b_map)) => map_equal(a_map, b_map),
        (Value::Array(a_items), Value::Array(b_items)) => {
            a_items.len() == b_items.len()
                && a_items.iter().zip(b_items).all(|(x, y)| deep_equal(x, y))
        }
        _ => a == b,
    }
}

fn map_equal(a: &Props, b: &Props) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (key, a_value) in a {
        let Some(b_value) = b.get(key) else {
            return false;
        };
        match a_value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    match b_value.index(index) {
                        Some(other) if deep_equal(item, other) => {}
                        _ => return false,
                    }
                }
            }
            Value::Map(_) => return deep_equal(a_value, b_value),
            _ => {
                if a_value != b_value {
                    return false;
                }
            }
        }
    }
    true
}

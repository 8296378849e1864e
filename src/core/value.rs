use std::fmt;

/// Bound for the underlying values of a declared enum attribute.
///
/// Implementors can be compared against the declared value set and serialized
/// into the JSON payload that write-through updates and descriptors carry.
pub trait EnumValue: Clone + PartialEq + fmt::Debug + Send + Sync {
    fn to_json(&self) -> serde_json::Value;
}

impl EnumValue for i8 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for i16 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for i32 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for i64 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for isize {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self as i64)
    }
}

impl EnumValue for u8 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for u16 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for u32 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for u64 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for usize {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self as u64)
    }
}

impl EnumValue for f32 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for f64 {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for bool {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for &'static str {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl EnumValue for String {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self.as_str())
    }
}

//! A tri-state field: absent, explicitly null, or set to a value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The state of a single DTO field.
///
/// The API distinguishes a key that is missing from a key set to `null`:
/// an update request only touches the keys it carries. `Field` keeps that
/// distinction through decode and encode. Absent fields are skipped when
/// serializing, `Null` is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The key was not present.
    Absent,
    /// The key was present with a `null` value.
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// True if the key was present, whether `null` or not.
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }
}

impl<T: Clone> Field<T> {
    /// The value, or `default` when absent or null.
    pub fn value_or(&self, default: T) -> T {
        self.value().cloned().unwrap_or(default)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` becomes an explicit `null`.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Field::Value(v),
            None => Field::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::Field;

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        name: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        price: Field<f64>,
    }

    #[test]
    fn missing_key_is_absent_and_null_is_null() {
        let probe: Probe = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert!(probe.name.is_absent());
        assert!(probe.price.is_null());
        assert!(probe.price.is_present());
    }

    #[test]
    fn absent_is_skipped_and_null_is_written() {
        let probe = Probe {
            name: Field::Absent,
            price: Field::Null,
        };
        assert_eq!(serde_json::to_string(&probe).unwrap(), r#"{"price":null}"#);

        let probe = Probe {
            name: "Shirt".to_string().into(),
            ..Probe::default()
        };
        assert_eq!(serde_json::to_string(&probe).unwrap(), r#"{"name":"Shirt"}"#);
    }

    #[test]
    fn accessors() {
        let price: Field<f64> = Field::Value(10.0);
        assert_eq!(price.value(), Some(&10.0));
        assert_eq!(price.clone().map(|p| p * 2.0).into_value(), Some(20.0));
        assert_eq!(Field::<f64>::Null.value_or(1.5), 1.5);
        assert_eq!(Field::<i64>::from(None), Field::Null);
    }
}

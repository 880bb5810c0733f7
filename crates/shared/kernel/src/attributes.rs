//! The configuration mapping a resource's desired or observed state is stored in.
//!
//! Keys are strings on the wire, but this API only ever accepts a declared
//! [`FieldName`], so reads and writes through the same constant always agree.

use crate::error::KernelError;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use skyfleet_domain::FieldName;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, Value>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&Value> {
        self.values.get(field.as_str())
    }

    /// Decodes the value under `field`.
    ///
    /// # Errors
    /// Returns [`KernelError::Attribute`] when the stored value has another shape than `T`.
    pub fn get_as<T>(&self, field: FieldName) -> Result<Option<T>, KernelError>
    where
        T: DeserializeOwned,
    {
        self.get(field)
            .map(|value| {
                T::deserialize(value).map_err(|source| KernelError::Attribute {
                    field,
                    source,
                    context: None,
                })
            })
            .transpose()
    }

    /// Stores `value` under `field`, returning the previous value.
    pub fn set(&mut self, field: FieldName, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(field.as_str().to_owned(), value.into())
    }

    /// Serializes `value` and stores it under `field`.
    ///
    /// # Errors
    /// Returns [`KernelError::Attribute`] when `value` cannot be represented as JSON.
    pub fn set_serialized<T>(&mut self, field: FieldName, value: &T) -> Result<(), KernelError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)
            .map_err(|source| KernelError::Attribute { field, source, context: None })?;
        self.set(field, value);
        Ok(())
    }

    pub fn remove(&mut self, field: FieldName) -> Option<Value> {
        self.values.remove(field.as_str())
    }

    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(field.as_str())
    }

    /// Reads a nested block.
    ///
    /// Blocks are stored either as a map or as a single-element list of maps; an
    /// empty list reads as an absent block.
    ///
    /// # Errors
    /// Returns [`KernelError::Attribute`] when the value is not a map, or when the
    /// list holds more than one block.
    pub fn block(&self, field: FieldName) -> Result<Option<Self>, KernelError> {
        let value = match self.get(field) {
            None => return Ok(None),
            Some(Value::Array(items)) => match items.as_slice() {
                [] => return Ok(None),
                [only] => only,
                _ => {
                    return Err(KernelError::Attribute {
                        field,
                        source: serde_json::Error::custom(format!(
                            "expected at most one block, found {}",
                            items.len()
                        )),
                        context: None,
                    });
                }
            },
            Some(other) => other,
        };

        Self::deserialize(value)
            .map(Some)
            .map_err(|source| KernelError::Attribute { field, source, context: None })
    }

    /// Stores `block` as a nested map under `field`.
    pub fn set_block(&mut self, field: FieldName, block: Self) -> Option<Value> {
        self.set(field, Value::Object(block.values.into_iter().collect()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys currently present, in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skyfleet_domain::{ComputeGroupField, SchedulingField};

    #[test]
    fn set_replaces_previous_value() {
        let mut attributes = Attributes::new();
        assert!(attributes.set(ComputeGroupField::MIN_SIZE, 1).is_none());
        assert_eq!(attributes.set(ComputeGroupField::MIN_SIZE, 2), Some(json!(1)));
        assert_eq!(attributes.get(ComputeGroupField::MIN_SIZE), Some(&json!(2)));
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn decode_failure_names_the_field() {
        let mut attributes = Attributes::new();
        attributes.set(ComputeGroupField::MAX_SIZE, "ten");

        let err = attributes.get_as::<u32>(ComputeGroupField::MAX_SIZE).expect_err("not a number");
        assert!(matches!(err, KernelError::Attribute { field, .. } if field == ComputeGroupField::MAX_SIZE));
        assert!(err.to_string().starts_with("Attribute 'max_size' error"));
    }

    #[test]
    fn empty_block_list_reads_as_absent() {
        let mut attributes = Attributes::new();
        attributes.set(SchedulingField::SCHEDULING, json!([]));
        assert!(attributes.block(SchedulingField::SCHEDULING).expect("valid").is_none());
        assert!(attributes.block(SchedulingField::SHUTDOWN_HOURS).expect("valid").is_none());
    }

    #[test]
    fn scalar_block_is_rejected() {
        let mut attributes = Attributes::new();
        attributes.set(SchedulingField::SCHEDULING, true);
        assert!(attributes.block(SchedulingField::SCHEDULING).is_err());
    }
}

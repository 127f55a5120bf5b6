use crate::errors::ClientError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    pub fn set(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.values.insert(key.into(), values);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(|v| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    // Full key replacement: for every key in `other`, its value sequence
    // replaces ours. Never an append.
    pub fn merge_replace(&mut self, other: &QueryValues) {
        for (key, values) in other.values.iter() {
            self.values.insert(key.clone(), values.clone());
        }
    }

    pub fn encode(&self) -> Result<String, ClientError> {
        let pairs: Vec<(&str, &str)> = self
            .values
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
            .collect();
        serde_urlencoded::to_string(pairs)
            .map_err(|err| ClientError::internal(format!("Query encoding failed: {}", err)))
    }
}

use crate::{
    convert::FromData,
    error::{Error, Result},
    value::data::Data,
};

/// String-keyed payload of a dict-convertible object.
///
/// Entries keep insertion order; inserting an existing key replaces its value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dict {
    entries: Vec<(String, Data)>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn with(mut self, key: impl ToString, value: impl Into<Data>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl ToString, value: impl Into<Data>) -> Option<Data> {
        let key = key.to_string();
        let value = value.into();
        if let Some((_, item)) = self.entries.iter_mut().find(|(k, _)| k == &key) {
            Some(std::mem::replace(item, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    pub fn get(&self, key: &str) -> Option<&Data> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<Data> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes an entry and converts it; a missing key is an error.
    pub fn take<T>(&mut self, key: &str) -> Result<T>
    where
        T: FromData,
    {
        match self.remove(key) {
            Some(value) => T::from_data(value),
            None => Err(Error::MissingField(key.to_owned())),
        }
    }

    pub fn take_if_present<T>(&mut self, key: &str) -> Result<Option<T>>
    where
        T: FromData,
    {
        self.remove(key).map(T::from_data).transpose()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Data)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl IntoIterator for Dict {
    type Item = (String, Data);
    type IntoIter = std::vec::IntoIter<(String, Data)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Dict
where
    K: ToString,
    V: Into<Data>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (key, value) in iter {
            result.insert(key, value);
        }
        result
    }
}

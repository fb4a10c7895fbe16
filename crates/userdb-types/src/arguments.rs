use std::collections::HashMap;

pub const FILE_NAME_KEY: &str = "fileName";
pub const OPERATION_KEY: &str = "operation";
pub const ID_KEY: &str = "id";
pub const ITEM_KEY: &str = "item";

/// Option map handed to the executor. Absent keys read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: HashMap<String, String>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn file_name(&self) -> &str {
        self.get(FILE_NAME_KEY)
    }

    pub fn operation(&self) -> &str {
        self.get(OPERATION_KEY)
    }

    pub fn id(&self) -> &str {
        self.get(ID_KEY)
    }

    pub fn item(&self) -> &str {
        self.get(ITEM_KEY)
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Arguments {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

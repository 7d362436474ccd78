/// Where the existence check looks. Fixed per deployment, never taken from
/// the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub index_name: String,
    pub key_attribute: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table_name: "troggle_user".into(),
            index_name: "email-index".into(),
            key_attribute: "email".into(),
        }
    }
}

impl Config {
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// `<key> = :email`, the condition used against the index.
    pub fn key_condition(&self) -> String {
        format!("{} = :email", self.key_attribute)
    }
}

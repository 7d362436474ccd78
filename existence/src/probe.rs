use crate::{Config, EmailIndex};

/// Result of one lookup. `Failed` keeps store errors apart from a genuine
/// miss so the response layer can decide how to report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found,
    NotFound,
    Failed(String),
}

impl Lookup {
    pub fn exists(&self) -> bool {
        matches!(self, Lookup::Found)
    }
}

/// Queries the configured email index once. Any non-zero item count means the
/// user exists; duplicates and further result pages are not considered.
pub async fn probe<I: EmailIndex>(index: &I, config: &Config, email: &str) -> Lookup {
    log::info!(
        "checking if user exists: {} in table {}",
        email,
        config.table_name
    );
    match index.count_matching(config, email).await {
        Ok(0) => {
            log::info!("user not found: {}", email);
            Lookup::NotFound
        }
        Ok(count) => {
            log::info!("user found: {} ({} items)", email, count);
            Lookup::Found
        }
        Err(err) => {
            log::error!("failed to query {}: {}", config.table_name, err);
            Lookup::Failed(err.to_string())
        }
    }
}

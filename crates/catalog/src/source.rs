use async_trait::async_trait;

use crate::error::CatalogError;

/// Where the title corpus comes from.
///
/// Implementations return titles in the store's result order; that order is
/// what the matcher uses to break score ties.
#[async_trait]
pub trait TitleSource: Send + Sync {
    /// Fetch every title. Called once at startup.
    async fn fetch_titles(&self) -> Result<Vec<String>, CatalogError>;

    /// Short, credential-free description used in log lines.
    fn describe(&self) -> String;
}

/// A fixed list of titles held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticTitleSource {
    titles: Vec<String>,
}

impl StaticTitleSource {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl TitleSource for StaticTitleSource {
    async fn fetch_titles(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.titles.clone())
    }

    fn describe(&self) -> String {
        format!("static list ({} titles)", self.titles.len())
    }
}

#[async_trait]
impl<T: TitleSource + ?Sized> TitleSource for Box<T> {
    async fn fetch_titles(&self) -> Result<Vec<String>, CatalogError> {
        (**self).fetch_titles().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

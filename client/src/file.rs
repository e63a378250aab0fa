use crate::error::Result;
use crate::error::SourceError;
use crate::http::decode_records;
use crate::source::ProjectSource;
use async_trait::async_trait;
use showcase_discovery::ProjectRecord;
use std::path::PathBuf;

/// Read-only [`ProjectSource`] over a saved `getall` response.
#[derive(Clone, Debug)]
pub struct FileProjectSource {
    path: PathBuf,
}

impl FileProjectSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Vec<ProjectRecord>> {
        let body = tokio::fs::read(&self.path).await?;
        decode_records("read project file", &body)
    }
}

#[async_trait]
impl ProjectSource for FileProjectSource {
    async fn fetch_all(&self) -> Result<Vec<ProjectRecord>> {
        self.load().await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<ProjectRecord>> {
        Ok(self.load().await?.into_iter().find(|record| record.id() == id))
    }

    async fn fetch_by_creator(&self, creator_id: &str) -> Result<Vec<ProjectRecord>> {
        let mut records = self.load().await?;
        records.retain(|record| record.creator_id() == Some(creator_id));
        Ok(records)
    }

    async fn delete_by_id(&self, _id: &str) -> Result<()> {
        Err(SourceError::Unsupported {
            operation: "delete project",
            source_kind: "a project file",
        })
    }
}

//! The table source abstraction.

use async_trait::async_trait;

use super::error::SourceResult;
use crate::models::RawTable;

/// Anything that can produce a [`RawTable`] on demand.
///
/// Implementations either return the complete table or an error; they never
/// return a partially fetched one.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch the current contents of the table.
    async fn fetch_table(&self) -> SourceResult<RawTable>;

    /// Short description for logs and the health endpoint.
    fn describe(&self) -> String;
}

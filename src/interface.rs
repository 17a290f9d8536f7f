/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::pagination::{into_sequence, is_paginated, next_link, take_items};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Read access to the SIP API
///
/// Implementors provide `get`; pagination is built on top of it.
#[async_trait]
pub trait ApiReader: Send + Sync {
    /// Performs a GET request and returns the decoded body
    async fn get(&self, endpoint: &str) -> Result<Value, AppError>;

    /// Follows `_links.next` from `endpoint` and collects the items of every page
    ///
    /// Responses that are not pages are returned as a sequence: arrays
    /// unchanged, objects wrapped in a one-element sequence. The first failing
    /// page request aborts the traversal.
    async fn get_all_pages(&self, endpoint: &str) -> Result<Vec<Value>, AppError> {
        let mut page = self.get(endpoint).await?;

        if !is_paginated(&page) {
            return Ok(into_sequence(page));
        }

        let mut results = take_items(&mut page)?;
        let mut pages = 1;

        while let Some(next) = next_link(&page).map(str::to_owned) {
            debug!("Fetching page {} from {}", pages + 1, next);
            page = self.get(&next).await?;
            results.extend(take_items(&mut page)?);
            pages += 1;
        }

        debug!("Collected {} items over {} pages", results.len(), pages);
        Ok(results)
    }
}

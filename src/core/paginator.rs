use crate::core::client::{ApiClient, ApiRequest};
use crate::domain::model::ListEnvelope;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use url::Url;

enum Cursor {
    First(ApiRequest),
    Next(Url),
    Done,
}

/// 依照 `_links._next.href` 逐頁取得列表，直到沒有下一頁
pub struct Paginator<T> {
    client: ApiClient,
    accept: String,
    cursor: Cursor,
    pages_fetched: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Paginator<T> {
    pub fn new(client: ApiClient, request: ApiRequest) -> Self {
        Self {
            client,
            accept: request.accept_header().to_string(),
            cursor: Cursor::First(request),
            pages_fetched: 0,
            _marker: PhantomData,
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.cursor, Cursor::Done)
    }

    pub async fn next_page(&mut self) -> Result<Option<ListEnvelope<T>>> {
        let cursor = std::mem::replace(&mut self.cursor, Cursor::Done);
        let url = match cursor {
            Cursor::First(request) => self.client.resolve_url(&request)?,
            Cursor::Next(url) => url,
            Cursor::Done => return Ok(None),
        };

        let page: ListEnvelope<T> = self.client.execute_url(url.clone(), &self.accept).await?;
        self.pages_fetched += 1;

        if let Some(href) = page.links.next_href() {
            let next = self.client.resolve_href(href)?;
            if next == url {
                tracing::warn!("Next link points back to {}, stopping pagination", url);
            } else {
                self.cursor = Cursor::Next(next);
            }
        }

        tracing::debug!(
            "📄 Page {} fetched with {} items{}",
            self.pages_fetched,
            page.items().len(),
            if self.is_exhausted() { " (last page)" } else { "" }
        );
        Ok(Some(page))
    }

    /// 取回所有頁面的項目；`max_items` 可提前停止
    pub async fn collect_items(mut self, max_items: Option<usize>) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.into_items());
            if let Some(max) = max_items {
                if items.len() >= max {
                    items.truncate(max);
                    break;
                }
            }
        }
        Ok(items)
    }
}

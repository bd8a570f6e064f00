//! Fetch and list operations over [`Schema`] values.
//!
//! [`Schema::hydrate`] turns JSON into records; the operations here decide
//! which JSON to fetch. Every operation requires the schema to declare an
//! endpoint and fails with [`StrandError::UnsupportedOperation`] before
//! touching the network when it does not.

use serde_json::Value;

use crate::client::StrandClient;
use crate::error::{Result, StrandError};
use crate::pagination::{ListParams, Page};
use crate::schema::{Record, Schema};

/// Page size used by [`Schema::list_all`], the maximum the API accepts.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Maximum number of pages [`Schema::list_all`] will fetch.
const MAX_PAGES: u32 = 1000;

impl Schema {
    /// Fetch a single record by identifier.
    ///
    /// # Arguments
    ///
    /// * `client` - The Strand API client
    /// * `id` - Resource identifier (e.g., `seq_VgkHvT2P`)
    ///
    /// # Errors
    ///
    /// [`StrandError::UnsupportedOperation`] for embedded-only kinds;
    /// otherwise whatever the transport reports, unmodified.
    #[tracing::instrument(skip(client))]
    pub async fn get(&'static self, client: &StrandClient, id: &str) -> Result<Record> {
        let endpoint = self.require_endpoint()?;
        let path = format!("{}/{}", endpoint, urlencoding::encode(id));
        let body = client.get(&path).await?;
        Ok(self.hydrate(&body))
    }

    /// Fetch one page of records.
    ///
    /// `filters` pass through to the query string untouched; `next_token`
    /// is the cursor from the previous page, absent for the first request.
    /// The returned page's cursor is already normalized, so `None` means
    /// the listing is done.
    ///
    /// # Errors
    ///
    /// [`StrandError::MalformedResponse`] if the response lacks the list
    /// envelope this schema expects, in addition to the transport errors.
    #[tracing::instrument(skip(client))]
    pub async fn list_page(
        &'static self,
        client: &StrandClient,
        filters: &[(&str, &str)],
        page_size: u32,
        next_token: Option<&str>,
    ) -> Result<Page<Record>> {
        let endpoint = self.require_endpoint()?;
        let params = ListParams::new(page_size, next_token, filters);
        let body = client.get_with_query(endpoint, &params).await?;

        let key = self.envelope_key().unwrap_or(endpoint);
        let items = match body.get(key) {
            Some(Value::Array(elements)) => elements
                .iter()
                .map(|element| self.hydrate(element))
                .collect(),
            _ => {
                return Err(StrandError::MalformedResponse(format!(
                    "list response carries no '{key}' array"
                )))
            }
        };

        let next = body
            .get("nextToken")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Page::new(items, next))
    }

    /// Fetch every record matching `filters`, walking all pages.
    ///
    /// Pages are requested at [`DEFAULT_PAGE_SIZE`] and concatenated in
    /// server order. Nothing is deduplicated: if the collection mutates
    /// between page fetches, the result can contain duplicates or gaps.
    ///
    /// # Errors
    ///
    /// The first failing page aborts the walk. A server that keeps
    /// returning cursors trips [`StrandError::PaginationOverflow`] after
    /// 1000 pages instead of looping forever.
    #[tracing::instrument(skip(client))]
    pub async fn list_all(
        &'static self,
        client: &StrandClient,
        filters: &[(&str, &str)],
    ) -> Result<Vec<Record>> {
        let mut all_records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0u32;

        loop {
            let page = self
                .list_page(client, filters, DEFAULT_PAGE_SIZE, cursor.as_deref())
                .await?;
            all_records.extend(page.items);

            match page.next_token {
                Some(token) => cursor = Some(token),
                None => return Ok(all_records),
            }

            pages += 1;
            if pages >= MAX_PAGES {
                tracing::warn!(kind = self.kind, pages, "pagination cursor never ran out");
                return Err(StrandError::PaginationOverflow { pages });
            }
        }
    }

    fn require_endpoint(&self) -> Result<&'static str> {
        self.endpoint
            .ok_or(StrandError::UnsupportedOperation { kind: self.kind })
    }
}

impl Record {
    /// Fetch this record's resource again and return the fresh snapshot.
    ///
    /// Records are immutable, so the original stays as it was; rebind it
    /// to pick up the new state.
    ///
    /// # Errors
    ///
    /// [`StrandError::MissingId`] when the record carries no string `id`,
    /// and everything [`Schema::get`] can report.
    #[tracing::instrument(skip(self, client), fields(kind = self.kind()))]
    pub async fn reload(&self, client: &StrandClient) -> Result<Record> {
        let id = self
            .id()
            .ok_or(StrandError::MissingId { kind: self.kind() })?;
        self.schema().get(client, id).await
    }
}

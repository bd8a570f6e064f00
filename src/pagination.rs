//! Pagination utilities for Strand API list responses.
//!
//! The API paginates with opaque continuation cursors: every list response
//! carries a `nextToken` that is either a cursor for the following page or
//! null/empty when the listing is exhausted. [`Page`] holds one page plus
//! its already-normalized cursor.

use std::collections::BTreeMap;

use serde::Serialize;

/// A page of results from the Strand API.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page, in server order.
    pub items: Vec<T>,
    /// Cursor for the page after this one; `None` when the listing is
    /// exhausted.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page from items and the raw cursor out of the response.
    ///
    /// The cursor is normalized on the way in: the API signals "no more
    /// pages" with either a null or an empty-string `nextToken`, and both
    /// become `None` here.
    #[must_use]
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self {
            items,
            next_token: normalize_token(next_token),
        }
    }

    /// Whether the server reported another page after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }

    /// Map the items to a different type, keeping the cursor.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_token: self.next_token,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Normalize a raw `nextToken` value: null and empty string both mean the
/// listing is exhausted.
#[must_use]
pub fn normalize_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

/// Query parameters for one paginated list request.
///
/// Filters ride along as flattened key/value pairs; the cursor is skipped
/// entirely on the first request rather than sent blank.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ListParams<'a> {
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
    #[serde(flatten)]
    pub filters: BTreeMap<&'a str, &'a str>,
}

impl<'a> ListParams<'a> {
    pub fn new(page_size: u32, next_token: Option<&'a str>, filters: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            page_size,
            next_token,
            filters: filters.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token(None), None);
        assert_eq!(normalize_token(Some(String::new())), None);
        assert_eq!(
            normalize_token(Some("abc123".to_string())),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_page_normalizes_cursor() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], Some(String::new()));
        assert_eq!(page.next_token, None);
        assert!(!page.has_more());

        let page: Page<i32> = Page::new(vec![1, 2, 3], Some("tok".to_string()));
        assert_eq!(page.next_token.as_deref(), Some("tok"));
        assert!(page.has_more());
    }

    #[test]
    fn test_page_map() {
        let page = Page::new(vec![1, 2, 3], Some("tok".to_string()));
        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.next_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_list_params_first_page() {
        let params = ListParams::new(100, None, &[]);
        let qs = serde_qs::to_string(&params).unwrap();
        assert_eq!(qs, "pageSize=100");
    }

    #[test]
    fn test_list_params_with_cursor_and_filters() {
        let filters = [("folderId", "fld_h0LWbdTq")];
        let params = ListParams::new(50, Some("tok42"), &filters);
        let qs = serde_qs::to_string(&params).unwrap();
        assert_eq!(qs, "pageSize=50&nextToken=tok42&folderId=fld_h0LWbdTq");
    }
}

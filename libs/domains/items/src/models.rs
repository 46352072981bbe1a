use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default page size for the paginated listing
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Largest accepted page size; anything above falls back to the default
pub const MAX_PAGE_SIZE: usize = 100;

/// Catalog item as persisted in the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, derived from creation time in milliseconds
    pub id: i64,
    /// Item name
    pub name: String,
    /// Item category
    pub category: String,
    /// Price, non-negative
    pub price: f64,
}

/// Request body for creating an item.
///
/// Fields are optional at the deserialization layer so each absent or
/// invalid field produces its own validation message instead of a generic
/// body-parse rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateItem {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

/// A validated item payload, ready for id assignment and persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// Query parameters for the item listing.
///
/// Parameters arrive as raw strings and are parsed leniently: anything
/// malformed falls back to its default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuery {
    /// Case-insensitive substring matched against name and category
    pub q: Option<String>,
    /// Maximum number of results; presence switches to the legacy
    /// non-paginated response shape
    pub limit: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Results per page (default 20, accepted range 1-100)
    pub page_size: Option<String>,
}

/// Resolved listing mode after lenient parameter parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Truncate the filtered sequence to `limit` and return a bare array
    Legacy { limit: usize },
    /// Slice the filtered sequence into the `{data, pagination}` shape
    Paginated { page: usize, page_size: usize },
}

impl ItemQuery {
    /// Resolve the listing mode.
    ///
    /// `limit` wins when it parses to a positive integer; otherwise the
    /// paginated defaults apply. A `pageSize` outside 1-100 falls back to
    /// the default rather than clamping.
    pub fn mode(&self) -> ListMode {
        if let Some(limit) = parse_positive(self.limit.as_deref()) {
            return ListMode::Legacy { limit };
        }

        let page = parse_positive(self.page.as_deref()).unwrap_or(1);
        let page_size = parse_positive(self.page_size.as_deref())
            .filter(|n| *n <= MAX_PAGE_SIZE)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        ListMode::Paginated { page, page_size }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Pagination metadata for the paginated listing shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Paginated listing response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedItems {
    pub data: Vec<Item>,
    pub pagination: Pagination,
}

/// Listing response, serialized as either the legacy bare array or the
/// paginated wrapper depending on how the request was made.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ListResponse {
    Legacy(Vec<Item>),
    Paginated(PaginatedItems),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>, page: Option<&str>, page_size: Option<&str>) -> ItemQuery {
        ItemQuery {
            q: None,
            limit: limit.map(String::from),
            page: page.map(String::from),
            page_size: page_size.map(String::from),
        }
    }

    #[test]
    fn test_mode_defaults_to_first_page() {
        assert_eq!(
            query(None, None, None).mode(),
            ListMode::Paginated {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE
            }
        );
    }

    #[test]
    fn test_mode_legacy_when_limit_is_positive() {
        assert_eq!(
            query(Some("5"), Some("3"), None).mode(),
            ListMode::Legacy { limit: 5 }
        );
    }

    #[test]
    fn test_mode_ignores_malformed_limit() {
        assert_eq!(
            query(Some("invalid"), None, None).mode(),
            ListMode::Paginated {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE
            }
        );
        assert_eq!(
            query(Some("-5"), None, None).mode(),
            ListMode::Paginated {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE
            }
        );
        assert_eq!(
            query(Some("0"), None, None).mode(),
            ListMode::Paginated {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE
            }
        );
    }

    #[test]
    fn test_mode_ignores_malformed_page_and_size() {
        assert_eq!(
            query(None, Some("abc"), Some("1000")).mode(),
            ListMode::Paginated {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE
            }
        );
        assert_eq!(
            query(None, Some("0"), Some("0")).mode(),
            ListMode::Paginated {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE
            }
        );
    }

    #[test]
    fn test_mode_accepts_page_size_bounds() {
        assert_eq!(
            query(None, Some("2"), Some("100")).mode(),
            ListMode::Paginated {
                page: 2,
                page_size: 100
            }
        );
        assert_eq!(
            query(None, None, Some("1")).mode(),
            ListMode::Paginated {
                page: 1,
                page_size: 1
            }
        );
        assert_eq!(
            query(None, None, Some("101")).mode(),
            ListMode::Paginated {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE
            }
        );
    }
}

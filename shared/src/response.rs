//! API Response types
//!
//! Standardized response envelope for the whole backend API. The client
//! decodes this shape strictly: a success envelope without `data`, or a
//! paginated list without its `pagination` object, is a decode error
//! rather than something to default around.

use serde::{Deserialize, Serialize};

/// Standard API response code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "code": "E0000",
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (absent on errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Whether the envelope carries the success code
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let pages = if per_page == 0 {
            0
        } else {
            ((total as f64) / (per_page as f64)).ceil() as u32
        };
        Self {
            page,
            per_page,
            total,
            pages,
        }
    }
}

/// Paginated list wrapper nested under `data`
///
/// The `pagination` object is mandatory; there is no fallback to a flat
/// `totalPages` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// List of items
    pub items: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    /// Create a new paginated list
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            items,
            pagination: Pagination::new(page, per_page, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_canonical_envelope() {
        let json = r#"{
            "code": "E0000",
            "message": "Success",
            "data": { "items": ["a", "b"], "pagination": { "page": 1, "per_page": 10, "total": 2, "pages": 1 } }
        }"#;

        let resp: ApiResponse<Paginated<String>> = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        let page = resp.data.unwrap();
        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.pagination.pages, 1);
    }

    #[test]
    fn decodes_error_envelope_without_data() {
        let json = r#"{ "code": "E4010", "message": "Session expired" }"#;
        let resp: ApiResponse<Paginated<String>> = serde_json::from_str(json).unwrap();
        assert!(!resp.is_success());
        assert!(resp.data.is_none());
        assert_eq!(resp.message, "Session expired");
    }

    #[test]
    fn rejects_list_without_pagination() {
        // Legacy flat `totalPages` shape is not read defensively; it fails to decode.
        let json = r#"{ "items": ["a"], "totalPages": 3 }"#;
        let result: Result<Paginated<String>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn pagination_rounds_page_count_up() {
        let p = Pagination::new(1, 10, 21);
        assert_eq!(p.pages, 3);
        let empty = Pagination::new(1, 0, 0);
        assert_eq!(empty.pages, 0);
    }
}

//! Common traits for Vercel resources

use crate::vercel::Pagination;

/// Common trait for named Vercel resources (teams, projects)
///
/// Provides a unified interface for resource identification and matching,
/// used by the `--team` / `--project` scoping flags.
pub trait VercelResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    ///
    /// Default implementation checks for exact match on either field.
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// Trait for API responses that carry a cursor-paginated list
///
/// The Vercel API wraps each listing in a resource-specific envelope
/// (`teams`, `projects`, `deployments`) with a shared optional `pagination`
/// block. Implement this for an envelope struct to enable use with
/// `VercelClient::fetch_all_pages()`.
pub trait CursorPage<T> {
    /// Consume self and return the page's items
    fn into_items(self) -> Vec<T>;

    /// Get reference to pagination metadata, if the response carried any
    fn pagination(&self) -> Option<&Pagination>;

    /// Cursor for the next page, if there is one
    ///
    /// The API uses `next == 0` (or an absent `pagination` block) as the
    /// "no more pages" sentinel.
    fn next_cursor(&self) -> Option<i64> {
        self.pagination()
            .and_then(|p| p.next)
            .filter(|&next| next != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: String,
        name: String,
    }

    impl VercelResource for TestResource {
        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    struct TestPage {
        items: Vec<u32>,
        pagination: Option<Pagination>,
    }

    impl CursorPage<u32> for TestPage {
        fn into_items(self) -> Vec<u32> {
            self.items
        }

        fn pagination(&self) -> Option<&Pagination> {
            self.pagination.as_ref()
        }
    }

    #[test]
    fn test_matches_by_id() {
        let resource = TestResource {
            id: "team_abc".to_string(),
            name: "my-team".to_string(),
        };
        assert!(resource.matches("team_abc"));
    }

    #[test]
    fn test_matches_by_name() {
        let resource = TestResource {
            id: "team_abc".to_string(),
            name: "my-team".to_string(),
        };
        assert!(resource.matches("my-team"));
    }

    #[test]
    fn test_no_match() {
        let resource = TestResource {
            id: "team_abc".to_string(),
            name: "my-team".to_string(),
        };
        assert!(!resource.matches("other"));
    }

    #[test]
    fn test_next_cursor_present() {
        let page = TestPage {
            items: vec![1, 2],
            pagination: Some(Pagination {
                count: Some(2),
                next: Some(1_600_000_000_000),
                prev: Some(1_500_000_000_000),
            }),
        };
        assert_eq!(page.next_cursor(), Some(1_600_000_000_000));
    }

    #[test]
    fn test_next_cursor_zero_is_terminal() {
        let page = TestPage {
            items: vec![1],
            pagination: Some(Pagination {
                count: Some(1),
                next: Some(0),
                prev: None,
            }),
        };
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn test_next_cursor_without_pagination() {
        let page = TestPage {
            items: vec![],
            pagination: None,
        };
        assert_eq!(page.next_cursor(), None);
    }
}

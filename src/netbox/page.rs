use serde::Deserialize;

/// List envelope returned by every Netbox collection endpoint
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    /// Cursor for the following page; `None` on the last page
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_envelope_with_null_cursor() {
        let page: Page<serde_json::Value> = serde_json::from_value(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{"id": 1}, {"id": 2}]
        }))
        .unwrap();

        assert_eq!(page.count, 2);
        assert!(!page.has_next());
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn treats_empty_cursor_as_last_page() {
        let page: Page<serde_json::Value> =
            serde_json::from_value(json!({"next": "", "results": []})).unwrap();
        assert_eq!(page.count, 0);
        assert!(!page.has_next());
    }
}

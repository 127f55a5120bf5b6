use crate::constants::{pagination, query as query_constants};
use crate::query::QueryValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl PageRequest {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    // The "no pagination" value: contributes no query parameters.
    pub fn none() -> Self {
        Self {
            limit: 0,
            offset: 0,
        }
    }

    pub fn query_values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        if self.offset >= 0 && self.limit > 0 {
            values.add(query_constants::OFFSET, self.offset.to_string());
            values.add(query_constants::LIMIT, self.limit.to_string());
        }
        values
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: pagination::DEFAULT_LIMIT,
            offset: pagination::DEFAULT_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageRequest;

    #[test]
    fn renders_offset_and_limit_as_decimal_strings() {
        let values = PageRequest::new(50, 100).query_values();
        assert_eq!(values.get("offset"), Some(&["100".to_string()][..]));
        assert_eq!(values.get("limit"), Some(&["50".to_string()][..]));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn default_is_first_page_of_twenty_five() {
        let values = PageRequest::default().query_values();
        assert_eq!(values.get("offset"), Some(&["0".to_string()][..]));
        assert_eq!(values.get("limit"), Some(&["25".to_string()][..]));
    }

    #[test]
    fn zero_or_negative_limit_opts_out() {
        assert!(PageRequest::none().query_values().is_empty());
        assert!(PageRequest::new(0, 10).query_values().is_empty());
        assert!(PageRequest::new(-5, 10).query_values().is_empty());
    }

    #[test]
    fn negative_offset_opts_out() {
        assert!(PageRequest::new(25, -1).query_values().is_empty());
    }
}

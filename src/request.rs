use crate::constants::headers as header_constants;
use crate::errors::ClientError;
use crate::filter::{DefaultFilter, Filter};
use crate::page::PageRequest;
use crate::query::QueryValues;
use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

pub struct StormpathRequest {
    pub method: Method,
    pub url: String,
    pub follow_redirects: bool,
    pub payload: Bytes,
    pub page_request: PageRequest,
    pub filter: Box<dyn Filter>,
    pub extra_params: QueryValues,
}

impl StormpathRequest {
    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            follow_redirects: true,
            payload: Bytes::new(),
            page_request: PageRequest::none(),
            filter: Box::new(DefaultFilter),
            extra_params: QueryValues::new(),
        }
    }

    pub fn post<T: Serialize>(
        url: impl Into<String>,
        payload: &T,
        extra_params: QueryValues,
    ) -> Result<Self, ClientError> {
        let payload = serde_json::to_vec(payload)?;
        Ok(Self {
            method: Method::Post,
            url: url.into(),
            follow_redirects: true,
            payload: Bytes::from(payload),
            page_request: PageRequest::none(),
            filter: Box::new(DefaultFilter),
            extra_params,
        })
    }

    pub fn new(
        method: Method,
        url: impl Into<String>,
        page_request: PageRequest,
        filter: Box<dyn Filter>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            follow_redirects: true,
            payload: Bytes::new(),
            page_request,
            filter,
            extra_params: QueryValues::new(),
        }
    }

    pub fn new_no_redirects(
        method: Method,
        url: impl Into<String>,
        page_request: PageRequest,
        filter: Box<dyn Filter>,
    ) -> Self {
        Self {
            follow_redirects: false,
            ..Self::new(method, url, page_request, filter)
        }
    }

    // Precedence, highest to lowest: extra params > filter > pagination.
    // Conflicts replace the whole key, never append.
    fn merged_query(&self) -> QueryValues {
        let mut query = self.page_request.query_values();
        query.merge_replace(&self.filter.query_values());
        query.merge_replace(&self.extra_params);
        query
    }

    pub fn to_http_request(&self) -> Result<reqwest::Request, ClientError> {
        self.to_http_request_at(&self.url)
    }

    // Same materialization against an already-resolved URL. `Client::execute`
    // goes through this after joining resource paths onto its base.
    pub fn to_http_request_at(&self, url: &str) -> Result<reqwest::Request, ClientError> {
        let query = self.merged_query();
        // The `?` is always appended, even with no parameters.
        let url = format!("{}?{}", url, query.encode()?);
        let url = Url::parse(&url)?;

        let mut request = reqwest::Request::new(self.method.into(), url);
        *request.body_mut() = Some(reqwest::Body::from(self.payload.clone()));

        if matches!(self.method, Method::Post | Method::Put) {
            request.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static(header_constants::CONTENT_TYPE_JSON),
            );
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::{Method, StormpathRequest};
    use crate::filter::DefaultFilter;
    use crate::page::PageRequest;
    use crate::query::QueryValues;

    #[test]
    fn delete_request_has_no_payload_and_follows_redirects() {
        let request = StormpathRequest::delete("https://api.example.com/accounts/123");
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.method.as_str(), "DELETE");
        assert!(request.payload.is_empty());
        assert!(request.follow_redirects);
        assert!(request.page_request.query_values().is_empty());
    }

    #[test]
    fn no_redirects_constructor_differs_only_in_redirect_preference() {
        let with = StormpathRequest::new(
            Method::Get,
            "https://api.example.com/accounts",
            PageRequest::new(10, 0),
            Box::new(DefaultFilter),
        );
        let without = StormpathRequest::new_no_redirects(
            Method::Get,
            "https://api.example.com/accounts",
            PageRequest::new(10, 0),
            Box::new(DefaultFilter),
        );
        assert!(with.follow_redirects);
        assert!(!without.follow_redirects);
        assert_eq!(with.method, without.method);
        assert_eq!(with.url, without.url);
        assert_eq!(with.page_request, without.page_request);
        assert_eq!(with.payload, without.payload);
    }

    #[test]
    fn pagination_lands_in_the_query_string() {
        let request = StormpathRequest::new(
            Method::Get,
            "https://api.example.com/accounts",
            PageRequest::new(50, 25),
            Box::new(DefaultFilter),
        );
        let http = request.to_http_request().unwrap();
        assert_eq!(
            http.url().as_str(),
            "https://api.example.com/accounts?limit=50&offset=25"
        );
    }

    #[test]
    fn empty_query_keeps_the_trailing_question_mark() {
        let request = StormpathRequest::delete("https://api.example.com/accounts/123");
        let http = request.to_http_request().unwrap();
        assert_eq!(
            http.url().as_str(),
            "https://api.example.com/accounts/123?"
        );
    }

    #[test]
    fn relative_url_is_a_construction_error() {
        let request = StormpathRequest::delete("/accounts/123");
        assert!(request.to_http_request().is_err());
    }

    #[test]
    fn extra_params_override_pagination() {
        let mut request = StormpathRequest::new(
            Method::Get,
            "https://api.example.com/accounts",
            PageRequest::new(25, 0),
            Box::new(DefaultFilter),
        );
        let mut extra = QueryValues::new();
        extra.add("limit", "100");
        request.extra_params = extra;
        let http = request.to_http_request().unwrap();
        assert_eq!(
            http.url().as_str(),
            "https://api.example.com/accounts?limit=100&offset=0"
        );
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::Link;

    #[test]
    fn serializes_to_an_href_object() {
        let link = Link::new("https://api.example.com/applications/abc");
        let json = serde_json::to_string(&link).expect("serialize link");
        assert_eq!(json, r#"{"href":"https://api.example.com/applications/abc"}"#);
    }
}

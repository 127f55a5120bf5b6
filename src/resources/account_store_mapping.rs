use super::Link;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStoreMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_account_store: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_group_store: Option<bool>,
    pub application: Link,
    pub account_store: Link,
}

impl AccountStoreMapping {
    pub fn new(application_href: impl Into<String>, account_store_href: impl Into<String>) -> Self {
        Self {
            application: Link::new(application_href),
            account_store: Link::new(account_store_href),
            ..Default::default()
        }
    }
}

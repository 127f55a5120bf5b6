mod account_store_mapping;
mod link;

pub use account_store_mapping::AccountStoreMapping;
pub use link::Link;

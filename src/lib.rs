pub mod client;
pub mod constants;
pub mod errors;
pub mod filter;
pub mod logger;
pub mod page;
pub mod query;
pub mod request;
pub mod resources;

pub use client::Client;
pub use errors::{ClientError, ClientErrorKind};
pub use filter::{AccountFilter, DefaultFilter, Filter, GroupFilter};
pub use page::PageRequest;
pub use query::QueryValues;
pub use request::{Method, StormpathRequest};
pub use resources::{AccountStoreMapping, Link};

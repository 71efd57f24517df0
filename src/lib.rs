mod attributes;
mod classifier;
mod db;
mod error;
pub mod geo;
mod helpers;
mod inspector;
mod literal;
mod parser;
mod parser_data;
mod substitution;
mod types;

pub use attributes::AttributeStore;
pub use classifier::UserAgentClassifier;
pub use error::{BoxError, Error, Result};
pub use geo::{GeoService, HttpClient, HttpClientConfig, IpRegistry, IpWhoIs};
#[cfg(feature = "blocking-client")]
pub use geo::ReqwestClient;
pub use inspector::{ClientRequest, RequestInspector, X_FORWARDED_FOR};
pub use types::*;

/// Boxed error returned by [`HttpClient`](crate::HttpClient) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    /// A geolocation lookup failed in transport or while decoding the body.
    #[error("{service}: {message}")]
    Service {
        service: &'static str,
        message: String,
        #[source]
        source: Option<BoxError>,
    },
    /// A list operation was attempted on an attribute holding a non-list value.
    #[error("attribute `{key}` is not a list")]
    NotAList { key: String },
}

impl Error {
    pub(crate) fn service(service: &'static str, source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self::Service {
            service,
            message: source.to_string(),
            source: Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

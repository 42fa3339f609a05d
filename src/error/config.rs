use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configured URL (OAuth endpoint or redirect) failed to parse.
    ///
    /// Unlike missing environment variables, which are only warned about, a
    /// malformed URL makes the OAuth client unbuildable and aborts startup.
    #[error("Invalid URL in {name}: {source}")]
    InvalidUrl {
        /// The configuration entry holding the bad value
        name: &'static str,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}

//! Host startup errors.

/// Errors that stop the host from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The forwarding HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    /// The listening socket could not be bound.
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),

    /// The server loop exited with an error.
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

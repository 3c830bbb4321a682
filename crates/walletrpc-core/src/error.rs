/// Boxed source error carried by [`RpcError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("RPC communication failure: {0}")]
    Rpc(#[from] RpcError),

    #[error("invalid request parameters: {0}")]
    InvalidParams(String),

    #[error("invalid amount `{input}`: {reason}")]
    InvalidAmount { input: String, reason: String },
}

/// Failures of a single JSON-RPC round trip.
///
/// The three kinds are kept apart: no response at all (`Transport`), a
/// response that is not a JSON-RPC answer (`HttpStatus`), and a JSON-RPC
/// answer that reports or implies failure (`ServerError`, `InvalidResponse`).
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    #[error("http status {status}")]
    HttpStatus { status: u16 },

    #[error("server error {code}: {message}")]
    ServerError { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }
}

impl CoreError {
    /// Remote JSON-RPC error code, if the daemon answered with one.
    pub fn server_code(&self) -> Option<i64> {
        match self {
            Self::Rpc(RpcError::ServerError { code, .. }) => Some(*code),
            _ => None,
        }
    }
}

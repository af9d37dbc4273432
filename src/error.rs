use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProbeError>;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// DNS, connect, TLS, timeout or body read failure. Never produced for
    /// an HTTP error status.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    #[error("invalid header {name}")]
    InvalidHeader {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}

impl ProbeError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ProbeError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_leaves_the_cause_to_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ProbeError::from(io);
        assert_eq!(err.to_string(), "failed to write report");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("pipe closed"));
    }
}

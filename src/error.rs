use crate::{As4ErrorCode, Severity};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("identifier generation failed: {0}")]
    IdentifierGenerationFailure(String),
    #[error("certificate subject has no common name")]
    CertificateFieldMissing,
    #[error("not a decodable X.509 certificate")]
    CertificateParseError,
    #[error("failed to read payload for compression")]
    CompressionIoFailure(#[source] std::io::Error),
    #[error("compression pool could not be started")]
    CompressionPoolFailure(#[from] rayon::ThreadPoolBuildError),
    #[error("unable to marshal UserMessage")]
    EnvelopeMarshallingFailure(#[source] quick_xml::DeError),
    #[error("unable to marshal SignalMessage")]
    SignalMarshallingFailure(#[source] quick_xml::DeError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("{0}")]
    Generic(String),
    #[error(transparent)]
    RegexError(#[from] regex::Error),
    #[error(transparent)]
    XmlReadError(#[from] quick_xml::Error),
}

/// Processing failure carrying the ebMS error taxonomy entry needed to answer
/// the sender with an Error signal instead of a bare transport fault.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ProtocolError {
    message: String,
    code: As4ErrorCode,
    severity: Severity,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProtocolError {
    /// New failure-severity error for the given taxonomy entry.
    pub fn new(message: impl Into<String>, code: As4ErrorCode) -> Self {
        ProtocolError {
            message: message.into(),
            code,
            severity: Severity::Failure,
            cause: None,
        }
    }

    /// Severity override, to be chained on construction.
    pub fn with_severity(self, severity: Severity) -> Self {
        ProtocolError { severity, ..self }
    }

    /// Cause setter, to be chained on construction.
    pub fn caused_by(self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        ProtocolError {
            cause: Some(Box::new(cause)),
            ..self
        }
    }

    pub fn code(&self) -> As4ErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Own message followed by every cause message in the chain, each on a
    /// new line prefixed with `cause: `.
    pub fn error_detail(&self) -> String {
        let mut detail = self.message.clone();
        let mut cause = std::error::Error::source(self);
        while let Some(inner) = cause {
            detail.push_str("\ncause: ");
            detail.push_str(&inner.to_string());
            cause = inner.source();
        }
        detail
    }
}

use regex::Regex;

use crate::{Error, Result};

/// Pluggable source of globally unique message identifiers. Implementations
/// must stay collision free under concurrent calls.
pub trait MessageIdGenerator: Send + Sync {
    fn generate(&self) -> Result<String>;
}

/// Default generator: a fresh v4 UUID qualified with a host part, giving ids
/// of the RFC 2822 msg-id shape `local@domain`.
#[derive(Debug, Clone)]
pub struct UuidMessageIdGenerator {
    host: String,
}

impl UuidMessageIdGenerator {
    pub fn new(host: impl Into<String>) -> Self {
        UuidMessageIdGenerator { host: host.into() }
    }
}

impl Default for UuidMessageIdGenerator {
    fn default() -> Self {
        UuidMessageIdGenerator::new("localhost")
    }
}

impl MessageIdGenerator for UuidMessageIdGenerator {
    fn generate(&self) -> Result<String> {
        Ok(format!("{}@{}", uuid::Uuid::new_v4(), self.host))
    }
}

/// Explicit-value-else-generate policy, applied independently to message id,
/// conversation id and payload href. A present, non-empty explicit value is
/// returned verbatim so retries and tests can correlate.
pub fn resolve_identifier<G>(explicit: Option<&str>, generator: &G) -> Result<String>
where
    G: MessageIdGenerator + ?Sized,
{
    match explicit {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => generator.generate(),
    }
}

/// Wraps an identifier into MIME content-id form (`<id>`), once.
pub fn wrap_content_id(id: &str) -> String {
    if id.starts_with('<') && id.ends_with('>') {
        id.to_owned()
    } else {
        format!("<{}>", id)
    }
}

/// Strips the MIME angle brackets and any `cid:` prefix from a content id.
pub fn clean_content_id(content_id: &str) -> &str {
    content_id
        .trim_start_matches("cid:")
        .trim_start_matches('<')
        .trim_end_matches('>')
}

/// Checks an inbound message id against the RFC 2822 msg-id shape used for
/// ebMS MessageId values.
pub fn verify_message_id(message_id: &str) -> Result<bool> {
    let re = Regex::new(r"^[a-zA-Z0-9_+.%=-]+@[a-zA-Z0-9_.-]+$")?;
    Ok(re.is_match(message_id))
}

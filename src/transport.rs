use crate::Result;

/// Binary part attached to an outbound message, keyed by MIME content id.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedPart {
    pub content_id: String,
    pub payload: Vec<u8>,
    pub mime_type: String,
}

/// Boundary to the SOAP/MIME transport. The envelope layer never opens
/// network connections; it attaches parts and hands over the marshalled
/// messaging header, delivery is the implementor's concern.
pub trait MessageTransport {
    /// Attaches a binary part under the given MIME content id.
    fn attach(&mut self, content_id: &str, payload: Vec<u8>, mime_type: &str) -> Result<()>;

    /// All parts attached so far, in attachment order.
    fn attachments(&self) -> &[AttachedPart];

    /// Receives the marshalled `eb:Messaging` SOAP header.
    fn set_messaging_header(&mut self, header_xml: &str);
}

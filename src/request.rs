use std::fmt;

/// Participant (business party) identifier, e.g. `0192:991825827`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantIdentifier(String);

impl ParticipantIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        ParticipantIdentifier(identifier.into())
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Document type identifier in its canonical scheme-qualified form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTypeIdentifier(String);

impl DocumentTypeIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        DocumentTypeIdentifier(identifier.into())
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentTypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Business process identifier; becomes the `eb:Service` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIdentifier(String);

impl ProcessIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        ProcessIdentifier(identifier.into())
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Routing metadata of a transmission: who sends what to whom, under which
/// process.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestHeader {
    sender: ParticipantIdentifier,
    receiver: ParticipantIdentifier,
    document_type: DocumentTypeIdentifier,
    process: ProcessIdentifier,
}

impl RequestHeader {
    pub fn new(
        sender: ParticipantIdentifier,
        receiver: ParticipantIdentifier,
        document_type: DocumentTypeIdentifier,
        process: ProcessIdentifier,
    ) -> Self {
        RequestHeader {
            sender,
            receiver,
            document_type,
            process,
        }
    }

    pub fn sender(&self) -> &ParticipantIdentifier {
        &self.sender
    }

    pub fn receiver(&self) -> &ParticipantIdentifier {
        &self.receiver
    }

    pub fn document_type(&self) -> &DocumentTypeIdentifier {
        &self.document_type
    }

    pub fn process(&self) -> &ProcessIdentifier {
        &self.process
    }
}

/// Target access point: its address and its certificate (DER), the source of
/// the receiving party id.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    address: String,
    certificate: Vec<u8>,
}

impl Endpoint {
    pub fn new(address: impl Into<String>, certificate: Vec<u8>) -> Self {
        Endpoint {
            address: address.into(),
            certificate,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }
}

/// Optional per-request overrides. Resolved exactly once at envelope-build
/// entry; absent fields fall back to generated values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct As4Extensions {
    message_id: Option<String>,
    conversation_id: Option<String>,
    payload_href: Option<String>,
    ref_to_message_id: Option<String>,
    message_properties: Vec<(String, String)>,
}

impl As4Extensions {
    pub fn new() -> Self {
        As4Extensions::default()
    }

    /// Explicit message id setter, to be chained on construction.
    pub fn with_message_id(self, message_id: impl Into<String>) -> Self {
        As4Extensions {
            message_id: Some(message_id.into()),
            ..self
        }
    }

    /// Explicit conversation id setter, to be chained on construction.
    pub fn with_conversation_id(self, conversation_id: impl Into<String>) -> Self {
        As4Extensions {
            conversation_id: Some(conversation_id.into()),
            ..self
        }
    }

    /// Explicit payload href setter, to be chained on construction.
    pub fn with_payload_href(self, payload_href: impl Into<String>) -> Self {
        As4Extensions {
            payload_href: Some(payload_href.into()),
            ..self
        }
    }

    /// Reference to the message this transmission answers.
    pub fn with_ref_to_message_id(self, ref_to_message_id: impl Into<String>) -> Self {
        As4Extensions {
            ref_to_message_id: Some(ref_to_message_id.into()),
            ..self
        }
    }

    /// Adds a caller message property. Caller values always win over the
    /// auto-filled mandatory pair.
    pub fn with_message_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.message_properties.push((name.into(), value.into()));
        self
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn payload_href(&self) -> Option<&str> {
        self.payload_href.as_deref()
    }

    pub fn ref_to_message_id(&self) -> Option<&str> {
        self.ref_to_message_id.as_deref()
    }

    pub fn message_properties(&self) -> &[(String, String)] {
        &self.message_properties
    }
}

/// Outbound payload descriptor. Immutable once constructed; read only to the
/// envelope layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransmissionRequest {
    header: RequestHeader,
    endpoint: Endpoint,
    payload: Vec<u8>,
    as4: Option<As4Extensions>,
}

impl TransmissionRequest {
    pub fn new(header: RequestHeader, endpoint: Endpoint, payload: Vec<u8>) -> Self {
        TransmissionRequest {
            header,
            endpoint,
            payload,
            as4: None,
        }
    }

    /// Extension setter, to be chained on construction.
    pub fn with_as4(self, as4: As4Extensions) -> Self {
        TransmissionRequest {
            as4: Some(as4),
            ..self
        }
    }

    pub fn header(&self) -> &RequestHeader {
        &self.header
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The extension view, defaulted when the caller supplied none.
    pub fn extensions(&self) -> As4Extensions {
        self.as4.clone().unwrap_or_default()
    }
}

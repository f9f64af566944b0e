use std::sync::atomic::{AtomicUsize, Ordering};

use as4_rs::{AttachedPart, MessageIdGenerator, MessageTransport, Result};
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};

pub struct CertificateSet {
    pub sender_cert: Vec<u8>,
    pub receiver_cert: Vec<u8>,
}

/// Fresh self-signed sender/receiver certificate pair with access point
/// common names.
pub fn get_certificate_set() -> CertificateSet {
    CertificateSet {
        sender_cert: self_signed_cert("APP_1000000101"),
        receiver_cert: self_signed_cert("APP_1000000202"),
    }
}

/// Self-signed certificate (DER) whose subject carries only the given
/// common name.
pub fn self_signed_cert(common_name: &str) -> Vec<u8> {
    let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, common_name);
    params.distinguished_name = dn;

    let key_pair = KeyPair::generate().unwrap();
    params.self_signed(&key_pair).unwrap().der().to_vec()
}

/// Self-signed certificate (DER) whose subject has no common name at all.
pub fn cert_without_common_name() -> Vec<u8> {
    let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
    let mut dn = DistinguishedName::new();
    dn.push(DnType::OrganizationName, "No Common Name AS");
    params.distinguished_name = dn;

    let key_pair = KeyPair::generate().unwrap();
    params.self_signed(&key_pair).unwrap().der().to_vec()
}

/// Deterministic generator producing `generated-1@test`, `generated-2@test`,
/// ... for assertions on fallback identifiers.
#[derive(Default)]
pub struct SequenceGenerator {
    counter: AtomicUsize,
}

impl MessageIdGenerator for SequenceGenerator {
    fn generate(&self) -> Result<String> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("generated-{}@test", n))
    }
}

/// In-memory stand-in for the SOAP/MIME transport boundary.
#[derive(Default)]
pub struct InMemoryTransport {
    parts: Vec<AttachedPart>,
    messaging_header: Option<String>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        InMemoryTransport::default()
    }

    pub fn messaging_header(&self) -> Option<&str> {
        self.messaging_header.as_deref()
    }
}

impl MessageTransport for InMemoryTransport {
    fn attach(&mut self, content_id: &str, payload: Vec<u8>, mime_type: &str) -> Result<()> {
        self.parts.push(AttachedPart {
            content_id: content_id.to_owned(),
            payload,
            mime_type: mime_type.to_owned(),
        });
        Ok(())
    }

    fn attachments(&self) -> &[AttachedPart] {
        &self.parts
    }

    fn set_messaging_header(&mut self, header_xml: &str) {
        self.messaging_header = Some(header_xml.to_owned());
    }
}

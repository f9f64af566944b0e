use as4_rs::{
    extract_message_id, soap_envelope, As4Extensions, CompressionPool, DocumentTypeIdentifier,
    Endpoint, EnvelopeBuilder, ParticipantIdentifier, ProcessIdentifier, Profile, RequestHeader,
    TransmissionRequest, DEFAULT_POOL_SIZE,
};
use utilities::{get_certificate_set, CertificateSet, InMemoryTransport, SequenceGenerator};

fn connectivity_request(receiver_cert: Vec<u8>) -> TransmissionRequest {
    let header = RequestHeader::new(
        ParticipantIdentifier::new("0192:991825827"),
        ParticipantIdentifier::new("0192:986252932"),
        DocumentTypeIdentifier::new("connectivity::cef##connectivity::Invoice"),
        ProcessIdentifier::new("connectivity:process"),
    );
    let endpoint = Endpoint::new("https://ap.example.org/as4", receiver_cert);
    TransmissionRequest::new(header, endpoint, b"<Invoice/>".to_vec())
}

#[test]
fn cef_profile_strips_the_connectivity_prefix_from_the_action() {
    // Arrange
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let profile = Profile::resolve("cef-connectivity");
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    // Act
    let user_message = builder
        .apply(&connectivity_request(receiver_cert), &mut message)
        .unwrap();

    // Assert
    assert_eq!(user_message.collaboration_info().action(), "Invoice");
    assert!(message
        .messaging_header()
        .unwrap()
        .contains("<eb:Action>Invoice</eb:Action>"));
}

#[test]
fn default_profile_passes_the_action_through_unchanged() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let profile = Profile::resolve("peppol");
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    let user_message = builder
        .apply(&connectivity_request(receiver_cert), &mut message)
        .unwrap();

    assert_eq!(
        user_message.collaboration_info().action(),
        "connectivity::cef##connectivity::Invoice"
    );
}

#[test]
fn default_profile_declares_peppol_agreement_and_scheme() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    builder
        .apply(&connectivity_request(receiver_cert), &mut message)
        .unwrap();

    let header = message.messaging_header().unwrap();
    assert!(header.contains(
        "<eb:AgreementRef>urn:fdc:peppol.eu:2017:agreements:tia:ap_provider</eb:AgreementRef>"
    ));
    assert!(header.contains("type=\"urn:fdc:peppol.eu:2017:identifiers:ap\""));
    assert!(header.contains("<eb:Service type=\"cenbii-procid-ubl\">"));
}

#[test]
fn cef_profile_omits_the_agreement_ref_entirely() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let profile = Profile::cef_connectivity();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    builder
        .apply(&connectivity_request(receiver_cert), &mut message)
        .unwrap();

    let header = message.messaging_header().unwrap();
    assert!(!header.contains("AgreementRef"));
    assert!(header.contains("type=\"urn:oasis:names:tc:ebcore:partyid-type:unregistered\""));
}

#[test]
fn built_envelopes_round_trip_through_the_inbound_extractor() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    let request = connectivity_request(receiver_cert)
        .with_as4(As4Extensions::new().with_message_id("round-trip@ap.example.org"));
    builder.apply(&request, &mut message).unwrap();

    let envelope = soap_envelope(message.messaging_header().unwrap());
    let extracted = extract_message_id(&envelope).unwrap();
    assert_eq!(extracted, "round-trip@ap.example.org");
}

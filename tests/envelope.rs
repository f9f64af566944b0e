use as4_rs::{
    As4Extensions, CompressionPool, DocumentTypeIdentifier, Endpoint, EnvelopeBuilder,
    MessageTransport, ParticipantIdentifier, ProcessIdentifier, Profile, RequestHeader,
    TransmissionRequest, UuidMessageIdGenerator, DEFAULT_POOL_SIZE,
};
use utilities::{get_certificate_set, CertificateSet, InMemoryTransport, SequenceGenerator};

fn sample_request(receiver_cert: Vec<u8>) -> TransmissionRequest {
    let header = RequestHeader::new(
        ParticipantIdentifier::new("0192:991825827"),
        ParticipantIdentifier::new("0192:986252932"),
        DocumentTypeIdentifier::new("urn:cen.eu:en16931:2017::Invoice"),
        ProcessIdentifier::new("urn:fdc:peppol.eu:2017:poacc:billing:01:1.0"),
    );
    let endpoint = Endpoint::new("https://ap.example.org/as4", receiver_cert);
    TransmissionRequest::new(header, endpoint, b"<Invoice>test</Invoice>".to_vec())
}

#[test]
fn explicit_identifiers_are_used_verbatim() {
    let _ = env_logger::try_init();
    // Arrange
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let request = sample_request(receiver_cert).with_as4(
        As4Extensions::new()
            .with_message_id("explicit-message@test")
            .with_conversation_id("explicit-conversation@test")
            .with_payload_href("explicit-payload@test"),
    );
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    // Act
    let user_message = builder.apply(&request, &mut message).unwrap();

    // Assert
    assert_eq!(
        user_message.message_info().message_id(),
        "explicit-message@test"
    );
    assert_eq!(
        user_message.collaboration_info().conversation_id(),
        "explicit-conversation@test"
    );
    assert_eq!(message.attachments()[0].content_id, "<explicit-payload@test>");

    let header = message.messaging_header().unwrap();
    assert!(header.contains("<eb:MessageId>explicit-message@test</eb:MessageId>"));
    assert!(header.contains("<eb:ConversationId>explicit-conversation@test</eb:ConversationId>"));
    assert!(header.contains("href=\"cid:explicit-payload@test\""));
}

#[test]
fn absent_identifiers_fall_back_to_generated_distinct_values() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let request = sample_request(receiver_cert);
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    let user_message = builder.apply(&request, &mut message).unwrap();

    let message_id = user_message.message_info().message_id().to_owned();
    let conversation_id = user_message.collaboration_info().conversation_id().to_owned();
    let payload_href = user_message.payload_info().parts()[0].href().to_owned();

    assert!(message_id.starts_with("generated-"));
    assert!(conversation_id.starts_with("generated-"));
    assert!(payload_href.starts_with("cid:generated-"));
    assert_ne!(message_id, conversation_id);
    assert_ne!(format!("cid:{}", message_id), payload_href);
}

#[test]
fn generated_uuid_identifiers_differ_between_envelopes() {
    let generator = UuidMessageIdGenerator::new("ap.example.org");
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);

    let request = sample_request(receiver_cert);
    let mut first = InMemoryTransport::new();
    let mut second = InMemoryTransport::new();

    let first_message = builder.apply(&request, &mut first).unwrap();
    let second_message = builder.apply(&request, &mut second).unwrap();

    assert_ne!(
        first_message.message_info().message_id(),
        second_message.message_info().message_id()
    );
}

#[test]
fn caller_message_properties_always_win() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let request = sample_request(receiver_cert).with_as4(
        As4Extensions::new()
            .with_message_property("originalSender", "caller-sender")
            .with_message_property("trackingId", "track-7"),
    );
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    let user_message = builder.apply(&request, &mut message).unwrap();

    let properties = user_message.message_properties();
    assert_eq!(properties.get("originalSender"), Some("caller-sender"));
    assert_eq!(properties.get("trackingId"), Some("track-7"));
    // finalRecipient was not supplied, so it is derived from the header
    assert_eq!(properties.get("finalRecipient"), Some("0192:986252932"));
}

#[test]
fn mandatory_properties_derive_from_header_when_absent() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let request = sample_request(receiver_cert);
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    let user_message = builder.apply(&request, &mut message).unwrap();

    let properties = user_message.message_properties();
    assert_eq!(properties.get("originalSender"), Some("0192:991825827"));
    assert_eq!(properties.get("finalRecipient"), Some("0192:986252932"));
}

#[test]
fn party_names_equal_certificate_common_names() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let request = sample_request(receiver_cert);
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    let user_message = builder.apply(&request, &mut message).unwrap();

    let party_info = user_message.party_info();
    assert_eq!(party_info.from().party_id().value(), "APP_1000000101");
    assert_eq!(party_info.to().party_id().value(), "APP_1000000202");
}

#[test]
fn missing_common_name_aborts_the_envelope() {
    let CertificateSet { sender_cert, .. } = get_certificate_set();
    let request = sample_request(utilities::cert_without_common_name());
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    match builder.apply(&request, &mut message) {
        Err(as4_rs::Error::CertificateFieldMissing) => {}
        other => panic!("expected CertificateFieldMissing, got {:?}", other.map(|_| ())),
    }
    // no header was handed to the transport
    assert!(message.messaging_header().is_none());
}

#[test]
fn attachment_is_octet_stream_with_matching_part_info() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let request = sample_request(receiver_cert)
        .with_as4(As4Extensions::new().with_payload_href("part-1@test"));
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    let user_message = builder.apply(&request, &mut message).unwrap();

    let attachment = &message.attachments()[0];
    assert_eq!(attachment.mime_type, "application/octet-stream");
    assert_eq!(attachment.content_id, "<part-1@test>");

    let parts = user_message.payload_info().parts();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].href(), "cid:part-1@test");

    let header = message.messaging_header().unwrap();
    assert!(header.contains("<eb:Property name=\"CompressionType\">application/gzip</eb:Property>"));
    assert!(header.contains("<eb:Property name=\"MimeType\">application/xml</eb:Property>"));
}

#[test]
fn attached_payload_decompresses_to_the_original() {
    use std::io::Read;

    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let request = sample_request(receiver_cert);
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);
    let mut message = InMemoryTransport::new();

    builder.apply(&request, &mut message).unwrap();

    let mut decoder = flate2::read::GzDecoder::new(message.attachments()[0].payload.as_slice());
    let mut plain = vec![];
    decoder.read_to_end(&mut plain).unwrap();
    assert_eq!(plain, b"<Invoice>test</Invoice>".to_vec());
}

#[test]
fn ref_to_message_id_only_present_when_supplied() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);

    let plain = sample_request(receiver_cert.clone());
    let mut without_ref = InMemoryTransport::new();
    builder.apply(&plain, &mut without_ref).unwrap();
    assert!(!without_ref
        .messaging_header()
        .unwrap()
        .contains("RefToMessageId"));

    let answering = sample_request(receiver_cert)
        .with_as4(As4Extensions::new().with_ref_to_message_id("earlier@test"));
    let mut with_ref = InMemoryTransport::new();
    builder.apply(&answering, &mut with_ref).unwrap();
    assert!(with_ref
        .messaging_header()
        .unwrap()
        .contains("<eb:RefToMessageId>earlier@test</eb:RefToMessageId>"));
}

#[test]
fn rebuilding_the_same_request_is_stable_apart_from_timestamps() {
    let CertificateSet {
        sender_cert,
        receiver_cert,
    } = get_certificate_set();
    let request = sample_request(receiver_cert).with_as4(
        As4Extensions::new()
            .with_message_id("stable-message@test")
            .with_conversation_id("stable-conversation@test")
            .with_payload_href("stable-payload@test"),
    );
    let profile = Profile::default_profile();
    let pool = CompressionPool::new(DEFAULT_POOL_SIZE).unwrap();
    let generator = SequenceGenerator::default();
    let builder = EnvelopeBuilder::new(&profile, &sender_cert, &pool, &generator);

    let mut first = InMemoryTransport::new();
    let mut second = InMemoryTransport::new();
    let first_message = builder.apply(&request, &mut first).unwrap();
    let second_message = builder.apply(&request, &mut second).unwrap();

    assert_eq!(
        first_message.message_info().message_id(),
        second_message.message_info().message_id()
    );
    assert_eq!(
        first_message.collaboration_info(),
        second_message.collaboration_info()
    );
    assert_eq!(
        first_message.message_properties(),
        second_message.message_properties()
    );
    assert_eq!(first_message.payload_info(), second_message.payload_info());
}

use chrono::Utc;

use crate::{
    compression::{CompressionPool, ATTACHMENT_MIME_TYPE},
    ids::{self, MessageIdGenerator},
    messages::{
        build_party_info, CollaborationInfo, MessageInfo, MessageProperties, PayloadInfo, Service,
        UserMessage, FINAL_RECIPIENT, ORIGINAL_SENDER,
    },
    profile::Profile,
    request::{As4Extensions, TransmissionRequest},
    soap,
    transport::MessageTransport,
    Result,
};

/// Builds one outbound UserMessage envelope per transmission request:
/// compresses and attaches the payload, then composes and marshals the
/// messaging header onto the transport. Any failure aborts the whole
/// envelope; a partially built message is never handed over for delivery.
pub struct EnvelopeBuilder<'a, G> {
    profile: &'a Profile,
    certificate: &'a [u8],
    compression: &'a CompressionPool,
    generator: &'a G,
}

impl<'a, G: MessageIdGenerator> EnvelopeBuilder<'a, G> {
    /// # Parameters
    ///
    /// * `certificate` - this access point's own certificate (DER), source
    ///   of the From party id
    pub fn new(
        profile: &'a Profile,
        certificate: &'a [u8],
        compression: &'a CompressionPool,
        generator: &'a G,
    ) -> Self {
        EnvelopeBuilder {
            profile,
            certificate,
            compression,
            generator,
        }
    }

    /// Applies the request to the transport message: attaches the compressed
    /// payload and sets the marshalled messaging header. Returns the built
    /// UserMessage for observability and response correlation.
    pub fn apply(
        &self,
        request: &TransmissionRequest,
        message: &mut dyn MessageTransport,
    ) -> Result<UserMessage> {
        let extensions = request.extensions();

        let compressed = self.compression.compress(request.payload())?;

        let payload_href = ids::resolve_identifier(extensions.payload_href(), self.generator)?;
        let content_id = ids::wrap_content_id(&payload_href);
        debug!("attaching compressed payload as {}", content_id);
        // Must be octet-stream for encrypted attachments
        message.attach(&content_id, compressed, ATTACHMENT_MIME_TYPE)?;

        let user_message = UserMessage::new(
            self.message_info(&extensions)?,
            build_party_info(
                self.certificate,
                request.endpoint().certificate(),
                self.profile,
            )?,
            self.collaboration_info(request, &extensions)?,
            message_properties(request, &extensions),
            PayloadInfo::from_attachments(message.attachments()),
        );

        let header = soap::marshal_user_message(&user_message)?;
        message.set_messaging_header(&header);

        Ok(user_message)
    }

    fn message_info(&self, extensions: &As4Extensions) -> Result<MessageInfo> {
        let message_id = ids::resolve_identifier(extensions.message_id(), self.generator)?;
        let message_info = MessageInfo::new(message_id, Utc::now());

        Ok(match extensions.ref_to_message_id() {
            Some(ref_to) => message_info.with_ref_to(ref_to),
            None => message_info,
        })
    }

    fn collaboration_info(
        &self,
        request: &TransmissionRequest,
        extensions: &As4Extensions,
    ) -> Result<CollaborationInfo> {
        let conversation_id =
            ids::resolve_identifier(extensions.conversation_id(), self.generator)?;
        let action = self
            .profile
            .action_strategy()
            .resolve(request.header().document_type());

        let collaboration_info = CollaborationInfo::new(
            Service::new(
                self.profile.service_type(),
                request.header().process().identifier(),
            ),
            action,
            conversation_id,
        );

        Ok(match self.profile.agreement_ref() {
            Some(agreement_ref) => collaboration_info.with_agreement_ref(agreement_ref),
            None => collaboration_info,
        })
    }
}

/// Caller properties first, then the mandatory pair filled only when absent.
fn message_properties(
    request: &TransmissionRequest,
    extensions: &As4Extensions,
) -> MessageProperties {
    let mut properties = MessageProperties::new(extensions.message_properties().iter().cloned());

    properties.push_if_absent(ORIGINAL_SENDER, request.header().sender().identifier());
    properties.push_if_absent(FINAL_RECIPIENT, request.header().receiver().identifier());

    properties
}

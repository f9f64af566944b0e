use chrono::{DateTime, Utc};
use quick_xml::{events::Event, Reader};

use crate::{
    ids::{self, MessageIdGenerator},
    messages::{As4ErrorCode, MessageInfo, Reference, SignalMessage},
    soap, Error, ProtocolError, Result,
};

/// Builds the SignalMessage answering an inbound UserMessage: a
/// non-repudiation receipt on success, a structured error signal on failure.
/// Exactly one of the two leaves this boundary for any processed message.
pub struct SignalFactory<G> {
    generator: G,
}

impl<G: MessageIdGenerator> SignalFactory<G> {
    pub fn new(generator: G) -> Self {
        SignalFactory { generator }
    }

    /// Non-repudiation receipt for the inbound message. Reference order is
    /// preserved, one entry per transmitted part.
    ///
    /// A marshalling failure here falls back to the error path with an
    /// internal-failure code, so the sender still receives a signal.
    pub fn receipt(
        &self,
        ref_to_message_id: &str,
        receipt_timestamp: DateTime<Utc>,
        references: Vec<Reference>,
    ) -> Result<String> {
        let message_info = MessageInfo::new(self.generator.generate()?, receipt_timestamp)
            .with_ref_to(ref_to_message_id);
        let signal = SignalMessage::receipt(message_info, references);

        match soap::marshal_signal_message(&signal) {
            Ok(header) => Ok(soap::soap_envelope(&header)),
            Err(Error::SignalMarshallingFailure(source)) => {
                debug!("receipt marshalling failed, answering with error signal");
                self.error(
                    ref_to_message_id,
                    &ProtocolError::new("unable to marshal SignalMessage", As4ErrorCode::Ebms0004)
                        .caused_by(source),
                )
            }
            Err(other) => Err(other),
        }
    }

    /// Error signal for the offending message. A marshalling failure here is
    /// fatal and propagates; no second signal is attempted.
    pub fn error(&self, message_id: &str, fault: &ProtocolError) -> Result<String> {
        let message_info =
            MessageInfo::new(self.generator.generate()?, Utc::now()).with_ref_to(message_id);
        let signal = SignalMessage::error(message_info, message_id, fault);

        let header = soap::marshal_signal_message(&signal)?;
        Ok(soap::soap_envelope(&header))
    }
}

/// Pulls the UserMessage's MessageId out of a received SOAP envelope.
/// Lenient about namespace prefixes: elements are matched by local name, so
/// any prefix choice on the sending side is accepted.
///
/// A missing or malformed id yields an `EBMS:0009` protocol error, ready for
/// the error signal path.
pub fn extract_message_id(envelope: &str) -> Result<String> {
    let mut reader = Reader::from_str(envelope);
    let mut path: Vec<String> = vec![];
    let mut message_id: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Text(t) => {
                let in_user_message_info = path.iter().any(|name| name == "UserMessage")
                    && path.len() >= 2
                    && path[path.len() - 2] == "MessageInfo"
                    && path[path.len() - 1] == "MessageId";
                if in_user_message_info && message_id.is_none() {
                    let text = t.unescape()?.trim().to_owned();
                    if !text.is_empty() {
                        message_id = Some(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let message_id = message_id.ok_or_else(|| {
        ProtocolError::new("no UserMessage MessageId in envelope", As4ErrorCode::Ebms0009)
    })?;

    if !ids::verify_message_id(&message_id)? {
        return Err(ProtocolError::new(
            format!("malformed MessageId: {}", message_id),
            As4ErrorCode::Ebms0009,
        )
        .into());
    }

    Ok(message_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECEIVED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <S12:Envelope xmlns:S12="http://www.w3.org/2003/05/soap-envelope">
          <S12:Header>
            <ns2:Messaging xmlns:ns2="http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/">
              <ns2:UserMessage>
                <ns2:MessageInfo>
                  <ns2:Timestamp>2021-03-16T08:30:21Z</ns2:Timestamp>
                  <ns2:MessageId>in-42@other.example.org</ns2:MessageId>
                </ns2:MessageInfo>
              </ns2:UserMessage>
            </ns2:Messaging>
          </S12:Header>
          <S12:Body/>
        </S12:Envelope>"#;

    #[test]
    fn finds_message_id_under_foreign_prefixes() {
        let message_id = extract_message_id(RECEIVED).unwrap();
        assert_eq!(message_id, "in-42@other.example.org");
    }

    #[test]
    fn missing_message_id_is_an_invalid_header_error() {
        let envelope = "<Envelope><Header/><Body/></Envelope>";
        match extract_message_id(envelope) {
            Err(Error::Protocol(fault)) => {
                assert_eq!(fault.code(), As4ErrorCode::Ebms0009);
            }
            other => panic!("expected protocol error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_message_id_is_rejected() {
        let envelope = RECEIVED.replace("in-42@other.example.org", "not a msg id");
        match extract_message_id(&envelope) {
            Err(Error::Protocol(fault)) => {
                assert_eq!(fault.code(), As4ErrorCode::Ebms0009);
            }
            other => panic!("expected protocol error, got {:?}", other),
        }
    }
}

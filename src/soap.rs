use crate::{
    messages::{SignalMessage, UserMessage},
    Error, Result,
};

/// ebMS3 core namespace.
pub const EBMS_NS: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/";
/// ebBP signals namespace (non-repudiation receipt body).
pub const EBBP_NS: &str = "http://docs.oasis-open.org/ebxml-bp/ebbp-signals-2.0";
/// XML digital signature namespace (digest references).
pub const DSIG_NS: &str = "http://www.w3.org/2000/09/xmldsig#";
/// SOAP 1.2 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// `eb:Messaging` SOAP header element carrying either a user or a signal
/// message, flagged mustUnderstand for the receiving node.
#[derive(Serialize)]
#[serde(rename = "eb:Messaging")]
struct Messaging<'a> {
    #[serde(rename = "@xmlns:eb")]
    xmlns_eb: &'static str,

    #[serde(rename = "@env:mustUnderstand")]
    must_understand: &'static str,

    #[serde(rename = "eb:UserMessage", skip_serializing_if = "Option::is_none")]
    user_message: Option<&'a UserMessage>,

    #[serde(rename = "eb:SignalMessage", skip_serializing_if = "Option::is_none")]
    signal_message: Option<&'a SignalMessage>,
}

impl<'a> Messaging<'a> {
    fn user_message(user_message: &'a UserMessage) -> Self {
        Messaging {
            xmlns_eb: EBMS_NS,
            must_understand: "true",
            user_message: Some(user_message),
            signal_message: None,
        }
    }

    fn signal_message(signal_message: &'a SignalMessage) -> Self {
        Messaging {
            xmlns_eb: EBMS_NS,
            must_understand: "true",
            user_message: None,
            signal_message: Some(signal_message),
        }
    }
}

/// Marshals the messaging header for an outbound UserMessage.
pub fn marshal_user_message(user_message: &UserMessage) -> Result<String> {
    quick_xml::se::to_string(&Messaging::user_message(user_message))
        .map_err(Error::EnvelopeMarshallingFailure)
}

/// Marshals the messaging header for a receipt or error signal.
pub fn marshal_signal_message(signal_message: &SignalMessage) -> Result<String> {
    quick_xml::se::to_string(&Messaging::signal_message(signal_message))
        .map_err(Error::SignalMarshallingFailure)
}

/// Wraps a marshalled messaging header into a complete SOAP 1.2 envelope
/// with an empty body.
pub fn soap_envelope(messaging_header: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <env:Envelope xmlns:env=\"{env}\">\
         <env:Header>{header}</env:Header>\
         <env:Body/>\
         </env:Envelope>",
        env = SOAP_ENV_NS,
        header = messaging_header,
    )
}

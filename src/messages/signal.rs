use crate::{
    soap::{DSIG_NS, EBBP_NS},
    ProtocolError,
};

use super::MessageInfo;

/// `eb:SignalMessage`: the answer an access point returns for an inbound
/// UserMessage. Exactly one of receipt or error is present; the private
/// fields and the two constructors keep it that way.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SignalMessage {
    #[serde(rename = "eb:MessageInfo")]
    message_info: MessageInfo,

    #[serde(rename = "eb:Receipt", skip_serializing_if = "Option::is_none")]
    receipt: Option<Receipt>,

    #[serde(rename = "eb:Error", skip_serializing_if = "Option::is_none")]
    error: Option<EbmsError>,
}

impl SignalMessage {
    /// Non-repudiation receipt answering the message referenced by
    /// `message_info`. Reference order is preserved on the wire.
    pub fn receipt(message_info: MessageInfo, references: Vec<Reference>) -> Self {
        SignalMessage {
            message_info,
            receipt: Some(Receipt {
                non_repudiation_information: NonRepudiationInformation::new(references),
            }),
            error: None,
        }
    }

    /// Error signal for the offending `message_id`, populated verbatim from
    /// the fault's taxonomy entry.
    pub fn error(message_info: MessageInfo, message_id: &str, fault: &ProtocolError) -> Self {
        SignalMessage {
            message_info,
            receipt: None,
            error: Some(EbmsError::from_fault(message_id, fault)),
        }
    }

    pub fn message_info(&self) -> &MessageInfo {
        &self.message_info
    }

    pub fn is_receipt(&self) -> bool {
        self.receipt.is_some()
    }

    pub fn get_receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn get_error(&self) -> Option<&EbmsError> {
        self.error.as_ref()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Receipt {
    #[serde(rename = "ebbp:NonRepudiationInformation")]
    non_repudiation_information: NonRepudiationInformation,
}

impl Receipt {
    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.non_repudiation_information
            .parts
            .iter()
            .map(|p| &p.reference)
    }
}

/// ebBP signal body wrapping one digest reference per transmitted part.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NonRepudiationInformation {
    #[serde(rename = "@xmlns:ebbp")]
    xmlns_ebbp: &'static str,

    #[serde(rename = "ebbp:MessagePartNRInformation")]
    parts: Vec<MessagePartNRInformation>,
}

impl NonRepudiationInformation {
    pub fn new(references: Vec<Reference>) -> Self {
        NonRepudiationInformation {
            xmlns_ebbp: EBBP_NS,
            parts: references
                .into_iter()
                .map(|reference| MessagePartNRInformation { reference })
                .collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessagePartNRInformation {
    #[serde(rename = "ds:Reference")]
    reference: Reference,
}

/// Per-part digest reference produced by the security layer. Carried as an
/// opaque value; this crate never computes or checks the digest itself.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Reference {
    #[serde(rename = "@xmlns:ds")]
    xmlns_ds: &'static str,

    #[serde(rename = "@URI")]
    uri: String,

    #[serde(rename = "ds:DigestMethod")]
    digest_method: DigestMethod,

    #[serde(rename = "ds:DigestValue")]
    digest_value: String,
}

impl Reference {
    pub fn new(
        uri: impl Into<String>,
        digest_algorithm: impl Into<String>,
        digest_value: impl Into<String>,
    ) -> Self {
        Reference {
            xmlns_ds: DSIG_NS,
            uri: uri.into(),
            digest_method: DigestMethod {
                algorithm: digest_algorithm.into(),
            },
            digest_value: digest_value.into(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DigestMethod {
    #[serde(rename = "@Algorithm")]
    algorithm: String,
}


/// `eb:Error` element with the AS4 taxonomy rendered as attributes and the
/// full cause chain in ErrorDetail.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EbmsError {
    #[serde(rename = "@origin")]
    origin: String,

    #[serde(rename = "@category")]
    category: String,

    #[serde(rename = "@errorCode")]
    error_code: String,

    #[serde(rename = "@severity")]
    severity: String,

    #[serde(rename = "@shortDescription")]
    short_description: String,

    #[serde(rename = "@refToMessageInError")]
    ref_to_message_in_error: String,

    #[serde(rename = "eb:ErrorDetail")]
    error_detail: String,
}

impl EbmsError {
    pub fn from_fault(message_id: &str, fault: &ProtocolError) -> Self {
        let code = fault.code();
        EbmsError {
            origin: code.origin().to_string(),
            category: code.category().to_string(),
            error_code: code.to_string(),
            severity: fault.severity().to_string(),
            short_description: code.short_description().to_string(),
            ref_to_message_in_error: message_id.to_string(),
            error_detail: fault.error_detail(),
        }
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    pub fn error_detail(&self) -> &str {
        &self.error_detail
    }

    pub fn ref_to_message_in_error(&self) -> &str {
        &self.ref_to_message_in_error
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }
}

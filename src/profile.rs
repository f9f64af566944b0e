use crate::request::DocumentTypeIdentifier;

/// Settings value selecting the restricted-connectivity profile.
pub const CEF_CONNECTIVITY: &str = "cef-connectivity";

const PEPPOL_PARTY_ID_TYPE: &str = "urn:fdc:peppol.eu:2017:identifiers:ap";
const UNREGISTERED_PARTY_ID_TYPE: &str = "urn:oasis:names:tc:ebcore:partyid-type:unregistered";
const FROM_ROLE: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/initiator";
const TO_ROLE: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/responder";
const SERVICE_TYPE: &str = "cenbii-procid-ubl";
const AGREEMENT_REF: &str = "urn:fdc:peppol.eu:2017:agreements:tia:ap_provider";

const CONNECTIVITY_PREFIX: &str = "connectivity::cef##connectivity::";

/// Transport profile resolved once at startup and passed through call
/// arguments; envelope construction never branches on settings strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    party_id_type: String,
    from_role: String,
    to_role: String,
    service_type: Option<String>,
    agreement_ref: Option<String>,
    action: ActionStrategy,
}

impl Profile {
    /// Resolves the profile from the configured transport type string.
    /// Anything other than a (case insensitive) `cef-connectivity` selects
    /// the default profile.
    pub fn resolve(transport_type: &str) -> Self {
        if transport_type.eq_ignore_ascii_case(CEF_CONNECTIVITY) {
            Profile::cef_connectivity()
        } else {
            Profile::default_profile()
        }
    }

    /// Default (Peppol) profile.
    pub fn default_profile() -> Self {
        Profile {
            party_id_type: PEPPOL_PARTY_ID_TYPE.into(),
            from_role: FROM_ROLE.into(),
            to_role: TO_ROLE.into(),
            service_type: Some(SERVICE_TYPE.into()),
            agreement_ref: Some(AGREEMENT_REF.into()),
            action: ActionStrategy::Default,
        }
    }

    /// Restricted-connectivity profile: unregistered party-id-type scheme,
    /// no agreement reference, namespace-unwrapping action strategy.
    pub fn cef_connectivity() -> Self {
        Profile {
            party_id_type: UNREGISTERED_PARTY_ID_TYPE.into(),
            agreement_ref: None,
            action: ActionStrategy::CefConnectivity,
            ..Profile::default_profile()
        }
    }

    pub fn party_id_type(&self) -> &str {
        &self.party_id_type
    }

    pub fn from_role(&self) -> &str {
        &self.from_role
    }

    pub fn to_role(&self) -> &str {
        &self.to_role
    }

    pub fn service_type(&self) -> Option<String> {
        self.service_type.clone()
    }

    pub fn agreement_ref(&self) -> Option<&str> {
        self.agreement_ref.as_deref()
    }

    pub fn action_strategy(&self) -> &ActionStrategy {
        &self.action
    }
}

/// Maps a document type to the wire-level `eb:Action` value. The two
/// variants are the closed set of deployment profiles; selection happens
/// once, in [`Profile::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStrategy {
    /// Canonical document-type translation, passed through unchanged.
    Default,
    /// Canonical translation, then the compound connectivity namespace
    /// prefix is stripped exactly once when leading.
    CefConnectivity,
}

impl ActionStrategy {
    pub fn resolve(&self, document_type: &DocumentTypeIdentifier) -> String {
        let action = translate_document_type_to_action(document_type);
        match self {
            ActionStrategy::Default => action,
            ActionStrategy::CefConnectivity => match action.strip_prefix(CONNECTIVITY_PREFIX) {
                Some(stripped) => stripped.to_owned(),
                None => action,
            },
        }
    }
}

/// Canonical (documentType, process) to action translation. Deterministic
/// and injective enough for the receiving side to map back.
fn translate_document_type_to_action(document_type: &DocumentTypeIdentifier) -> String {
    document_type.identifier().to_owned()
}

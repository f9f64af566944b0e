/// `eb:CollaborationInfo` block. Element order follows the ebMS3 core
/// schema: AgreementRef, Service, Action, ConversationId.
/// AgreementRef is omitted entirely when the profile configures none.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CollaborationInfo {
    #[serde(rename = "eb:AgreementRef", skip_serializing_if = "Option::is_none")]
    agreement_ref: Option<AgreementRef>,

    #[serde(rename = "eb:Service")]
    service: Service,

    #[serde(rename = "eb:Action")]
    action: String,

    #[serde(rename = "eb:ConversationId")]
    conversation_id: String,
}

impl CollaborationInfo {
    pub fn new(
        service: Service,
        action: impl Into<String>,
        conversation_id: impl Into<String>,
    ) -> Self {
        CollaborationInfo {
            agreement_ref: None,
            service,
            action: action.into(),
            conversation_id: conversation_id.into(),
        }
    }

    /// AgreementRef setter, to be chained on construction.
    pub fn with_agreement_ref(self, value: impl Into<String>) -> Self {
        CollaborationInfo {
            agreement_ref: Some(AgreementRef {
                value: value.into(),
            }),
            ..self
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn agreement_ref(&self) -> Option<&str> {
        self.agreement_ref.as_ref().map(|a| a.value.as_str())
    }

    pub fn service(&self) -> &Service {
        &self.service
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AgreementRef {
    #[serde(rename = "$text")]
    value: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Service {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    service_type: Option<String>,

    #[serde(rename = "$text")]
    value: String,
}

impl Service {
    pub fn new(service_type: Option<String>, value: impl Into<String>) -> Self {
        Service {
            service_type,
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn service_type(&self) -> Option<&str> {
        self.service_type.as_deref()
    }
}

use super::{CollaborationInfo, MessageInfo, MessageProperties, PartyInfo, PayloadInfo};

/// ebMS3 `eb:UserMessage` structure.
/// [Specification](http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/core/ebms_core-3.0-spec.html)
///
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UserMessage {
    #[serde(rename = "eb:MessageInfo")]
    message_info: MessageInfo,

    #[serde(rename = "eb:PartyInfo")]
    party_info: PartyInfo,

    #[serde(rename = "eb:CollaborationInfo")]
    collaboration_info: CollaborationInfo,

    #[serde(rename = "eb:MessageProperties")]
    message_properties: MessageProperties,

    #[serde(rename = "eb:PayloadInfo")]
    payload_info: PayloadInfo,
}

impl UserMessage {
    pub fn new(
        message_info: MessageInfo,
        party_info: PartyInfo,
        collaboration_info: CollaborationInfo,
        message_properties: MessageProperties,
        payload_info: PayloadInfo,
    ) -> Self {
        UserMessage {
            message_info,
            party_info,
            collaboration_info,
            message_properties,
            payload_info,
        }
    }

    pub fn message_info(&self) -> &MessageInfo {
        &self.message_info
    }

    pub fn party_info(&self) -> &PartyInfo {
        &self.party_info
    }

    pub fn collaboration_info(&self) -> &CollaborationInfo {
        &self.collaboration_info
    }

    pub fn message_properties(&self) -> &MessageProperties {
        &self.message_properties
    }

    pub fn payload_info(&self) -> &PayloadInfo {
        &self.payload_info
    }
}

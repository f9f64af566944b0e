use chrono::{DateTime, Utc};

/// `eb:MessageInfo` block shared by user and signal messages.
/// Element order follows the ebMS3 core schema: Timestamp, MessageId,
/// RefToMessageId.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessageInfo {
    #[serde(rename = "eb:Timestamp")]
    timestamp: DateTime<Utc>,

    #[serde(rename = "eb:MessageId")]
    message_id: String,

    #[serde(rename = "eb:RefToMessageId", skip_serializing_if = "Option::is_none")]
    ref_to_message_id: Option<String>,
}

impl MessageInfo {
    /// Constructor without a reference to a prior message.
    pub fn new(message_id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        MessageInfo {
            timestamp,
            message_id: message_id.into(),
            ref_to_message_id: None,
        }
    }

    /// Reference setter for envelopes answering a prior message, to be
    /// chained on construction.
    pub fn with_ref_to(self, ref_to_message_id: impl Into<String>) -> Self {
        MessageInfo {
            ref_to_message_id: Some(ref_to_message_id.into()),
            ..self
        }
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn ref_to_message_id(&self) -> Option<&str> {
        self.ref_to_message_id.as_deref()
    }
}

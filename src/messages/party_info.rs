use crate::{certificate, profile::Profile, Result};

/// `eb:PartyInfo` block identifying the sending and receiving access points.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PartyInfo {
    #[serde(rename = "eb:From")]
    from: Party,

    #[serde(rename = "eb:To")]
    to: Party,
}

impl PartyInfo {
    pub fn new(from: Party, to: Party) -> Self {
        PartyInfo { from, to }
    }

    pub fn from(&self) -> &Party {
        &self.from
    }

    pub fn to(&self) -> &Party {
        &self.to
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Party {
    #[serde(rename = "eb:PartyId")]
    party_id: PartyId,

    #[serde(rename = "eb:Role")]
    role: String,
}

impl Party {
    pub fn new(party_id: PartyId, role: impl Into<String>) -> Self {
        Party {
            party_id,
            role: role.into(),
        }
    }

    pub fn party_id(&self) -> &PartyId {
        &self.party_id
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PartyId {
    #[serde(rename = "@type")]
    id_type: String,

    #[serde(rename = "$text")]
    value: String,
}

impl PartyId {
    pub fn new(id_type: impl Into<String>, value: impl Into<String>) -> Self {
        PartyId {
            id_type: id_type.into(),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Derives From/To from the access point certificates and the profile's
/// party-id-type scheme. Pure, no I/O.
pub fn build_party_info(
    sender_cert: &[u8],
    receiver_cert: &[u8],
    profile: &Profile,
) -> Result<PartyInfo> {
    let from_name = certificate::extract_common_name(sender_cert)?;
    let to_name = certificate::extract_common_name(receiver_cert)?;

    Ok(PartyInfo::new(
        Party::new(
            PartyId::new(profile.party_id_type(), from_name),
            profile.from_role(),
        ),
        Party::new(
            PartyId::new(profile.party_id_type(), to_name),
            profile.to_role(),
        ),
    ))
}

use crate::{compression, ids, transport::AttachedPart};

/// `eb:PayloadInfo` block: one `eb:PartInfo` per transmitted attachment.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PayloadInfo {
    #[serde(rename = "eb:PartInfo")]
    part_info: Vec<PartInfo>,
}

impl PayloadInfo {
    pub fn new(part_info: Vec<PartInfo>) -> Self {
        PayloadInfo { part_info }
    }

    /// One PartInfo per attached part, href in `cid:` form with the MIME
    /// content id cleaned of its angle brackets.
    pub fn from_attachments(attachments: &[AttachedPart]) -> Self {
        let part_info = attachments
            .iter()
            .map(|part| PartInfo::new(format!("cid:{}", ids::clean_content_id(&part.content_id))))
            .collect();
        PayloadInfo { part_info }
    }

    pub fn parts(&self) -> &[PartInfo] {
        &self.part_info
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PartInfo {
    #[serde(rename = "@href")]
    href: String,

    #[serde(rename = "eb:PartProperties")]
    part_properties: PartProperties,
}

impl PartInfo {
    /// PartInfo for a compressed payload part; the declared properties are
    /// the compression adapter's fixed pair.
    pub fn new(href: impl Into<String>) -> Self {
        PartInfo {
            href: href.into(),
            part_properties: PartProperties {
                properties: compression::part_properties(),
            },
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn part_properties(&self) -> &[super::Property] {
        &self.part_properties.properties
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PartProperties {
    #[serde(rename = "eb:Property")]
    properties: Vec<super::Property>,
}

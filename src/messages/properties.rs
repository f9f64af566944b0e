/// Name of the mandatory property carrying the original business sender.
pub const ORIGINAL_SENDER: &str = "originalSender";
/// Name of the mandatory property carrying the final business recipient.
pub const FINAL_RECIPIENT: &str = "finalRecipient";

/// `eb:MessageProperties` block: an ordered set of name/value pairs with
/// unique keys. Caller-supplied entries always win over auto-filled ones.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessageProperties {
    #[serde(rename = "eb:Property")]
    properties: Vec<Property>,
}

impl MessageProperties {
    /// Builds the set from caller-supplied pairs, preserving their order and
    /// dropping duplicate keys (first occurrence wins).
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut properties: Vec<Property> = vec![];
        for (name, value) in pairs {
            if !properties.iter().any(|p| p.name == name) {
                properties.push(Property::new(name, value));
            }
        }
        MessageProperties { properties }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
    }

    /// Appends the property only when no entry with that key exists yet.
    pub fn push_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.properties.push(Property::new(name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }
}

/// Single `eb:Property`: name attribute, text content value.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Property {
    #[serde(rename = "@name")]
    name: String,

    #[serde(rename = "$text")]
    value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

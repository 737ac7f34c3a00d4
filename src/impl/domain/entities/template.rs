use std::fmt;

/// Visual layout used to render a receipt. All layouts share the same data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Minimal,
    Card,
    Modern,
    Professional,
    Compact,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Minimal,
        TemplateId::Card,
        TemplateId::Modern,
        TemplateId::Professional,
        TemplateId::Compact,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            TemplateId::Minimal => "minimal",
            TemplateId::Card => "card",
            TemplateId::Modern => "modern",
            TemplateId::Professional => "professional",
            TemplateId::Compact => "compact",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Minimal => "Minimal",
            TemplateId::Card => "Card",
            TemplateId::Modern => "Modern",
            TemplateId::Professional => "Professional",
            TemplateId::Compact => "Compact",
        }
    }

    /// Unknown tags resolve to the default template.
    pub fn from_tag(tag: &str) -> Self {
        TemplateId::ALL
            .into_iter()
            .find(|t| t.tag() == tag.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        for t in TemplateId::ALL {
            assert_eq!(TemplateId::from_tag(t.tag()), t);
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_minimal() {
        assert_eq!(TemplateId::from_tag("fancy"), TemplateId::Minimal);
        assert_eq!(TemplateId::from_tag(""), TemplateId::Minimal);
    }
}

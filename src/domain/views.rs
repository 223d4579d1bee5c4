use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The list screens of the marketplace, one per record type
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ViewKind {
    /// Admin user management
    #[default]
    Users,
    /// Opportunity browser and moderation queue
    Opportunities,
    /// Applications received by a mentor
    Applications,
    /// Discussion moderation
    Discussions,
    AuditLogs,
    /// Opportunities a mentee bookmarked
    Saved,
}

impl ViewKind {
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Users => "Users",
            ViewKind::Opportunities => "Opportunities",
            ViewKind::Applications => "Applications",
            ViewKind::Discussions => "Discussions",
            ViewKind::AuditLogs => "Audit logs",
            ViewKind::Saved => "Saved opportunities",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ViewKind::Users, "users")]
    #[case(ViewKind::AuditLogs, "audit-logs")]
    #[case(ViewKind::Saved, "saved")]
    fn test_view_kind_names(#[case] kind: ViewKind, #[case] name: &str) {
        assert_eq!(kind.to_string(), name);
        assert_eq!(ViewKind::from_str(name).ok(), Some(kind));
        assert_eq!(
            serde_json::to_string(&kind).ok(),
            Some(format!("\"{name}\""))
        );
    }
}

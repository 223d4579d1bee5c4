//! Marketplace records shown by the list views
//!
//! The field names follow the JSON the REST backend returns (camelCase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::listing::{Facet, Listable, TableRow};

fn options<E: IntoEnumIterator + ToString>() -> Vec<String> {
    E::iter().map(|value| value.to_string()).collect()
}

fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Mentee,
    Mentor,
    Admin,
}

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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OpportunityType {
    Mentorship,
    Internship,
    Research,
    Project,
    Workshop,
}

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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OpportunityStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Closed,
}

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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Withdrawn,
}

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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiscussionStatus {
    #[default]
    Open,
    Flagged,
    Hidden,
    Locked,
}

/// Account row of the admin user table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl Listable for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.email)
    }

    fn facet(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Role => Some(self.role.to_string()),
            Facet::Status => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        &[Facet::Role, Facet::Status]
    }

    fn facet_options(facet: Facet) -> Vec<String> {
        match facet {
            Facet::Role => options::<Role>(),
            Facet::Status => options::<AccountStatus>(),
            _ => Vec::new(),
        }
    }
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Role", "Status", "Joined"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            self.status.to_string(),
            short_date(&self.created_at),
        ]
    }
}

/// An opportunity posted by a mentor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub mentor_name: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub category: String,
    #[serde(default)]
    pub status: OpportunityStatus,
    #[serde(default)]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Listable for Opportunity {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.mentor_name)
    }

    fn facet(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Status => Some(self.status.to_string()),
            Facet::Kind => Some(self.kind.to_string()),
            Facet::Category => Some(self.category.clone()),
            Facet::Role => None,
        }
    }

    fn facets() -> &'static [Facet] {
        &[Facet::Status, Facet::Kind, Facet::Category]
    }

    fn facet_options(facet: Facet) -> Vec<String> {
        match facet {
            Facet::Status => options::<OpportunityStatus>(),
            Facet::Kind => options::<OpportunityType>(),
            _ => Vec::new(),
        }
    }
}

impl TableRow for Opportunity {
    fn headers() -> &'static [&'static str] {
        &["Title", "Mentor", "Type", "Category", "Status", "Posted"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.mentor_name.clone(),
            self.kind.to_string(),
            self.category.clone(),
            self.status.to_string(),
            short_date(&self.created_at),
        ]
    }
}

/// A mentee's application to an opportunity, as reviewed by the mentor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub opportunity_id: String,
    pub opportunity_title: String,
    pub applicant_name: String,
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

impl Listable for Application {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.applicant_name, self.opportunity_title)
    }

    fn facet(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Status => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        &[Facet::Status]
    }

    fn facet_options(facet: Facet) -> Vec<String> {
        match facet {
            Facet::Status => options::<ApplicationStatus>(),
            _ => Vec::new(),
        }
    }
}

impl TableRow for Application {
    fn headers() -> &'static [&'static str] {
        &["Applicant", "Opportunity", "Status", "Applied"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.applicant_name.clone(),
            self.opportunity_title.clone(),
            self.status.to_string(),
            short_date(&self.applied_at),
        ]
    }
}

/// Community discussion thread under moderation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub category: String,
    #[serde(default)]
    pub status: DiscussionStatus,
    #[serde(default)]
    pub reply_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Listable for Discussion {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.author_name)
    }

    fn facet(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Status => Some(self.status.to_string()),
            Facet::Category => Some(self.category.clone()),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        &[Facet::Status, Facet::Category]
    }

    fn facet_options(facet: Facet) -> Vec<String> {
        match facet {
            Facet::Status => options::<DiscussionStatus>(),
            _ => Vec::new(),
        }
    }
}

impl TableRow for Discussion {
    fn headers() -> &'static [&'static str] {
        &["Title", "Author", "Category", "Status", "Replies", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author_name.clone(),
            self.category.clone(),
            self.status.to_string(),
            self.reply_count.to_string(),
            short_date(&self.created_at),
        ]
    }
}

/// One moderation action recorded by the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub actor_name: String,
    pub action: String,
    pub target_type: String,
    pub target_id: String,
    #[serde(default)]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Listable for AuditLog {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.actor_name,
            self.action,
            self.target_id,
            self.details.as_deref().unwrap_or_default()
        )
    }

    fn facet(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Kind => Some(self.target_type.clone()),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        &[Facet::Kind]
    }
}

impl TableRow for AuditLog {
    fn headers() -> &'static [&'static str] {
        &["When", "Actor", "Action", "Target"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.created_at.format("%Y-%m-%d %H:%M").to_string(),
            self.actor_name.clone(),
            self.action.clone(),
            format!("{}:{}", self.target_type, self.target_id),
        ]
    }
}

/// An opportunity bookmarked by a mentee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedOpportunity {
    pub id: String,
    pub opportunity_id: String,
    pub title: String,
    pub mentor_name: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub saved_at: DateTime<Utc>,
}

impl Listable for SavedOpportunity {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.mentor_name)
    }

    fn facet(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Kind => Some(self.kind.to_string()),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        &[Facet::Kind]
    }

    fn facet_options(facet: Facet) -> Vec<String> {
        match facet {
            Facet::Kind => options::<OpportunityType>(),
            _ => Vec::new(),
        }
    }
}

impl TableRow for SavedOpportunity {
    fn headers() -> &'static [&'static str] {
        &["Title", "Mentor", "Type", "Saved"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.mentor_name.clone(),
            self.kind.to_string(),
            short_date(&self.saved_at),
        ]
    }
}

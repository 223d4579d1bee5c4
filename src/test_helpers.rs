//! Record builders shared by unit and integration tests

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::records::{
    AccountStatus, AuditLog, Opportunity, OpportunityStatus, OpportunityType, Role, User,
};

fn timestamp(offset_minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
        + chrono::Duration::minutes(offset_minutes)
}

/// A user with an `@example.com` address derived from the name.
///
/// Unknown roles fall back to mentee.
pub fn user(id: &str, name: &str, role: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        role: role.parse().unwrap_or(Role::Mentee),
        status: AccountStatus::Active,
        created_at: timestamp(0),
    }
}

/// `count` users named `User 0..count`, alternating mentor / mentee
pub fn users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| {
            let role = if i % 2 == 0 { "mentor" } else { "mentee" };
            user(&format!("u{i}"), &format!("User {i}"), role)
        })
        .collect()
}

/// Unknown types fall back to mentorship, unknown statuses to pending
pub fn opportunity(id: &str, title: &str, kind: &str, status: &str) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        mentor_name: "Grace Hopper".to_string(),
        kind: kind.parse().unwrap_or(OpportunityType::Mentorship),
        category: "engineering".to_string(),
        status: status.parse().unwrap_or(OpportunityStatus::Pending),
        location: None,
        created_at: timestamp(0),
    }
}

pub fn audit_logs(count: usize) -> Vec<AuditLog> {
    (0..count)
        .map(|i| AuditLog {
            id: format!("log{i}"),
            actor_name: "admin".to_string(),
            action: if i % 3 == 0 { "delete" } else { "approve" }.to_string(),
            target_type: "opportunity".to_string(),
            target_id: format!("o{i}"),
            details: None,
            created_at: timestamp(i as i64),
        })
        .collect()
}

use serde::{Deserialize, Serialize};

use crate::enums::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Manager,
    #[serde(rename = "teamlead")]
    TeamLead,
    Member,
    Viewer,
}

/// Демо-пользователь. `team` is set for every role except manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

/// Dashboard a user lands on after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Manager,
    Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub is_authenticated: bool,
    pub current_user: Option<User>,
    pub default_view: Option<DashboardView>,
    pub can_select_team: bool,
    pub initial_team: Option<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_roundtrip_json() {
        let user: User = serde_json::from_str(
            r#"{"id":"2","username":"lead_a","name":"Lead A","role":"teamlead","team":"A"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::TeamLead);
        assert_eq!(user.team, Some(Team::A));

        let manager: User = serde_json::from_str(
            r#"{"id":"1","username":"boss","name":"Boss","role":"manager"}"#,
        )
        .unwrap();
        assert_eq!(manager.team, None);
        assert!(!serde_json::to_string(&manager).unwrap().contains("team"));
    }
}

//! Правила представлений по ролям
//!
//! Advisory only: handlers report these flags to the client, the store
//! never checks them.

use contracts::enums::Team;
use contracts::system::users::{DashboardView, SessionInfo, User, UserRole};

pub fn default_view(role: UserRole) -> DashboardView {
    match role {
        UserRole::Manager | UserRole::Viewer => DashboardView::Manager,
        UserRole::TeamLead | UserRole::Member => DashboardView::Team,
    }
}

/// Only a team lead looking at their own team may edit.
pub fn can_edit(user: Option<&User>, team: Team) -> bool {
    matches!(
        user,
        Some(User { role: UserRole::TeamLead, team: Some(own), .. }) if *own == team
    )
}

pub fn can_select_team(user: Option<&User>) -> bool {
    matches!(user, Some(u) if u.role == UserRole::Manager)
}

/// Team shown first on the team dashboard
pub fn initial_team(user: Option<&User>) -> Team {
    match user {
        Some(User {
            role: UserRole::TeamLead | UserRole::Member,
            team: Some(team),
            ..
        }) => *team,
        _ => Team::A,
    }
}

pub fn find_user<'a>(roster: &'a [User], username: &str) -> Option<&'a User> {
    roster.iter().find(|u| u.username == username)
}

pub fn session_info(user: Option<&User>) -> SessionInfo {
    SessionInfo {
        is_authenticated: user.is_some(),
        current_user: user.cloned(),
        default_view: user.map(|u| default_view(u.role)),
        can_select_team: can_select_team(user),
        initial_team: user.map(|u| initial_team(Some(u))),
    }
}

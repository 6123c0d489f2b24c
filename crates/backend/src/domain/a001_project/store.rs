use contracts::domain::a001_project::{ProjectPatch, ProjectRecord, TeamProject};
use contracts::enums::Team;
use contracts::system::users::User;

use super::seed::SeedData;

/// Хранилище проектов в памяти
///
/// Owns the three team collections and the current session. Nothing here
/// fails: an unmatched project number is a no-op and the mutators report how
/// many records they touched.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    team_a: Vec<ProjectRecord>,
    team_b: Vec<ProjectRecord>,
    team_c: Vec<ProjectRecord>,
    current_user: Option<User>,
    is_authenticated: bool,
}

impl ProjectStore {
    pub fn new(
        team_a: Vec<ProjectRecord>,
        team_b: Vec<ProjectRecord>,
        team_c: Vec<ProjectRecord>,
    ) -> Self {
        Self {
            team_a,
            team_b,
            team_c,
            current_user: None,
            is_authenticated: false,
        }
    }

    pub fn from_seed(seed: &SeedData) -> Self {
        Self::new(
            seed.team_a.clone(),
            seed.team_b.clone(),
            seed.team_c.clone(),
        )
    }

    fn collection(&self, team: Team) -> &Vec<ProjectRecord> {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
            Team::C => &self.team_c,
        }
    }

    fn collection_mut(&mut self, team: Team) -> &mut Vec<ProjectRecord> {
        match team {
            Team::A => &mut self.team_a,
            Team::B => &mut self.team_b,
            Team::C => &mut self.team_c,
        }
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// No credential check: any user is accepted.
    pub fn login(&mut self, user: User) {
        tracing::info!("Login: {} ({:?})", user.username, user.role);
        self.current_user = Some(user);
        self.is_authenticated = true;
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!("Logout: {}", user.username);
        }
        self.is_authenticated = false;
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Все проекты с меткой команды: A, затем B, затем C
    pub fn get_all_projects(&self) -> Vec<TeamProject> {
        Team::all()
            .into_iter()
            .flat_map(|team| {
                self.collection(team).iter().map(move |record| TeamProject {
                    record: record.clone(),
                    team,
                })
            })
            .collect()
    }

    pub fn get_team_projects(&self, team: Team) -> &[ProjectRecord] {
        self.collection(team)
    }

    /// Unknown team names resolve to an empty list.
    pub fn get_team_projects_by_name(&self, team: &str) -> &[ProjectRecord] {
        match Team::from_code(team) {
            Some(team) => self.collection(team),
            None => &[],
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Merge `patch` into every record of `team` with the given number.
    pub fn update_project(&mut self, team: Team, project_number: &str, patch: &ProjectPatch) -> usize {
        let mut affected = 0;
        for record in self
            .collection_mut(team)
            .iter_mut()
            .filter(|p| p.project_number == project_number)
        {
            record.apply(patch);
            affected += 1;
        }

        if affected == 0 {
            tracing::debug!("Update: {} not found in team {}", project_number, team);
        } else {
            tracing::info!("Updated project {} in team {}", project_number, team);
        }
        affected
    }

    /// Appended as-is; project number uniqueness is up to the caller.
    pub fn add_project(&mut self, team: Team, record: ProjectRecord) {
        tracing::info!("Added project {} to team {}", record.project_number, team);
        self.collection_mut(team).push(record);
    }

    pub fn append_projects(&mut self, team: Team, records: Vec<ProjectRecord>) -> usize {
        let count = records.len();
        self.collection_mut(team).extend(records);
        tracing::info!("Appended {} projects to team {}", count, team);
        count
    }

    /// Remove every record of `team` with the given number.
    pub fn delete_project(&mut self, team: Team, project_number: &str) -> usize {
        let projects = self.collection_mut(team);
        let before = projects.len();
        projects.retain(|p| p.project_number != project_number);
        let removed = before - projects.len();

        if removed == 0 {
            tracing::debug!("Delete: {} not found in team {}", project_number, team);
        } else {
            tracing::info!("Deleted project {} from team {}", project_number, team);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;

    fn record(number: &str, status: &str) -> ProjectRecord {
        ProjectRecord {
            project_number: number.into(),
            project_name: format!("Project {}", number),
            sales_rep: "John Smith".into(),
            project_status: status.into(),
            submitted_value_estimator: "$1,000.00".into(),
            ..Default::default()
        }
    }

    fn store() -> ProjectStore {
        ProjectStore::new(
            vec![record("P-001", "HOD"), record("P-002", "Submitted")],
            vec![record("P-101", "Designer")],
            vec![record("P-201", "Client"), record("P-202", "HOD"), record("P-203", "HOD")],
        )
    }

    #[test]
    fn test_login_logout() {
        let mut store = store();
        assert!(!store.is_authenticated());

        store.login(User {
            id: "1".into(),
            username: "manager".into(),
            name: "Manager".into(),
            role: UserRole::Manager,
            team: None,
        });
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().username, "manager");

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());

        // idempotent
        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_get_all_projects_tags_and_orders() {
        let store = store();
        let all = store.get_all_projects();
        assert_eq!(all.len(), 6);
        assert_eq!(
            all.len(),
            Team::all()
                .iter()
                .map(|t| store.get_team_projects(*t).len())
                .sum::<usize>()
        );

        let tags: Vec<(Team, &str)> = all
            .iter()
            .map(|p| (p.team, p.record.project_number.as_str()))
            .collect();
        assert_eq!(
            tags,
            vec![
                (Team::A, "P-001"),
                (Team::A, "P-002"),
                (Team::B, "P-101"),
                (Team::C, "P-201"),
                (Team::C, "P-202"),
                (Team::C, "P-203"),
            ]
        );
    }

    #[test]
    fn test_get_team_projects_unknown_team_is_empty() {
        let store = store();
        assert_eq!(store.get_team_projects_by_name("B").len(), 1);
        assert!(store.get_team_projects_by_name("D").is_empty());
        assert!(store.get_team_projects_by_name("").is_empty());
    }

    #[test]
    fn test_update_changes_only_patched_field() {
        let mut store = store();
        let before = store.clone();
        let patch = ProjectPatch {
            project_status: Some("Client".into()),
            ..Default::default()
        };

        assert_eq!(store.update_project(Team::A, "P-001", &patch), 1);

        let updated = &store.get_team_projects(Team::A)[0];
        let original = &before.get_team_projects(Team::A)[0];
        assert_eq!(updated.project_status, "Client");
        assert_eq!(
            ProjectRecord {
                project_status: original.project_status.clone(),
                ..updated.clone()
            },
            *original
        );
        assert_eq!(store.get_team_projects(Team::A)[1], before.get_team_projects(Team::A)[1]);
        assert_eq!(store.get_team_projects(Team::B), before.get_team_projects(Team::B));
        assert_eq!(store.get_team_projects(Team::C), before.get_team_projects(Team::C));
    }

    #[test]
    fn test_update_missing_number_is_noop() {
        let mut store = store();
        let before = store.get_team_projects(Team::A).to_vec();
        let patch = ProjectPatch {
            project_status: Some("Client".into()),
            ..Default::default()
        };
        assert_eq!(store.update_project(Team::A, "P-999", &patch), 0);
        assert_eq!(store.get_team_projects(Team::A), before.as_slice());
    }

    #[test]
    fn test_update_stays_within_team() {
        let mut store = store();
        let patch = ProjectPatch {
            comments: Some("moved?".into()),
            ..Default::default()
        };
        // P-101 lives in team B
        assert_eq!(store.update_project(Team::A, "P-101", &patch), 0);
        assert_eq!(store.get_team_projects(Team::B)[0].comments, "");
    }

    #[test]
    fn test_update_can_rekey() {
        let mut store = store();
        let patch = ProjectPatch {
            project_number: Some("P-005".into()),
            ..Default::default()
        };
        store.update_project(Team::A, "P-001", &patch);
        assert_eq!(store.get_team_projects(Team::A)[0].project_number, "P-005");
        assert_eq!(store.update_project(Team::A, "P-001", &patch), 0);
    }

    #[test]
    fn test_add_appends_without_uniqueness_check() {
        let mut store = store();
        store.add_project(Team::B, record("P-101", "HOD"));
        let team_b = store.get_team_projects(Team::B);
        assert_eq!(team_b.len(), 2);
        assert_eq!(team_b[1].project_status, "HOD");
    }

    #[test]
    fn test_delete_missing_number_is_noop() {
        let mut store = store();
        let before = store.get_team_projects(Team::B).to_vec();
        assert_eq!(store.delete_project(Team::B, "P-999"), 0);
        assert_eq!(store.get_team_projects(Team::B), before.as_slice());
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let mut store = store();
        store.add_project(Team::C, record("P-201", "Submitted"));
        assert_eq!(store.delete_project(Team::C, "P-201"), 2);
        let numbers: Vec<&str> = store
            .get_team_projects(Team::C)
            .iter()
            .map(|p| p.project_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["P-202", "P-203"]);
    }

    #[test]
    fn test_append_projects() {
        let mut store = store();
        let added = store.append_projects(Team::A, vec![record("X-1", ""), record("X-2", "")]);
        assert_eq!(added, 2);
        assert_eq!(store.get_team_projects(Team::A).len(), 4);
        assert_eq!(store.get_team_projects(Team::A)[3].project_number, "X-2");
    }
}

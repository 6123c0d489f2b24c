use contracts::domain::a001_project::ProjectRecord;
use contracts::system::users::User;
use serde::Deserialize;
use std::path::Path;

/// Seed dataset embedded in the binary
const EMBEDDED_SEED: &str = include_str!("../../../data/seed.json");

/// Начальные данные: три списка проектов и демо-пользователи
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub users: Vec<User>,
    #[serde(rename = "teamA", default)]
    pub team_a: Vec<ProjectRecord>,
    #[serde(rename = "teamB", default)]
    pub team_b: Vec<ProjectRecord>,
    #[serde(rename = "teamC", default)]
    pub team_c: Vec<ProjectRecord>,
}

/// Load seed data from `path`, or the embedded dataset when no path is given.
pub fn load_seed(path: Option<&Path>) -> anyhow::Result<SeedData> {
    let seed: SeedData = match path {
        Some(path) => {
            tracing::info!("Loading seed data from: {}", path.display());
            let contents = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Cannot read seed file {}: {}", path.display(), e))?;
            serde_json::from_str(&contents)?
        }
        None => {
            tracing::info!("Using embedded seed data");
            serde_json::from_str(EMBEDDED_SEED)?
        }
    };

    tracing::info!(
        "Seed loaded: {} users, team A {} / team B {} / team C {} projects",
        seed.users.len(),
        seed.team_a.len(),
        seed.team_b.len(),
        seed.team_c.len()
    );
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Team;
    use std::io::Write;

    #[test]
    fn test_embedded_seed_parses() {
        let seed = load_seed(None).unwrap();
        assert_eq!(seed.team_a.len(), 4);
        assert_eq!(seed.team_b.len(), 3);
        assert_eq!(seed.team_c.len(), 3);
        assert_eq!(seed.users.len(), 8);
        assert!(seed.users.iter().any(|u| u.username == "manager"));
    }

    #[test]
    fn test_project_numbers_unique_per_team() {
        let seed = load_seed(None).unwrap();
        for (team, projects) in [
            (Team::A, &seed.team_a),
            (Team::B, &seed.team_b),
            (Team::C, &seed.team_c),
        ] {
            let mut numbers: Vec<&str> = projects
                .iter()
                .map(|p| p.project_number.as_str())
                .collect();
            let before = numbers.len();
            numbers.sort();
            numbers.dedup();
            assert_eq!(numbers.len(), before, "duplicate project number in team {}", team);
        }
    }

    #[test]
    fn test_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"users":[],"teamB":[{{"projectNumber":"X-1"}}]}}"#
        )
        .unwrap();
        let seed = load_seed(Some(file.path())).unwrap();
        assert!(seed.team_a.is_empty());
        assert_eq!(seed.team_b[0].project_number, "X-1");
    }

    #[test]
    fn test_missing_seed_file_is_error() {
        assert!(load_seed(Some(Path::new("/nonexistent/seed.json"))).is_err());
    }
}

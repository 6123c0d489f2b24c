use serde::{Deserialize, Serialize};
use std::fmt;

/// Команда, за которой закреплены проекты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
    C,
}

impl Team {
    /// Получить код команды
    pub fn code(&self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
            Team::C => "C",
        }
    }

    /// All teams in display order.
    pub fn all() -> [Team; 3] {
        [Team::A, Team::B, Team::C]
    }

    /// Exact, case-sensitive match on the team code. Anything else is "no team".
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Team::A),
            "B" => Some(Team::B),
            "C" => Some(Team::C),
            _ => None,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Team::from_code("A"), Some(Team::A));
        assert_eq!(Team::from_code("C"), Some(Team::C));
        assert_eq!(Team::from_code("a"), None);
        assert_eq!(Team::from_code("D"), None);
        assert_eq!(Team::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Team::B).unwrap(), "\"B\"");
        let team: Team = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(team, Team::C);
    }
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Screen identifiers the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Login,
    Dashboard,
    Classroom,
    AssignmentCreate,
    Submissions,
    Analytics,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view identifier `{0}`")]
pub struct UnknownView(pub String);

impl View {
    pub const ALL: [View; 7] = [
        View::Login,
        View::Dashboard,
        View::Classroom,
        View::AssignmentCreate,
        View::Submissions,
        View::Analytics,
        View::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Login => "login",
            View::Dashboard => "dashboard",
            View::Classroom => "classroom",
            View::AssignmentCreate => "assignment-create",
            View::Submissions => "submissions",
            View::Analytics => "analytics",
            View::Settings => "settings",
        }
    }

    /// Identifiers outside the enumeration land on the dashboard.
    pub fn parse_or_dashboard(s: &str) -> View {
        s.parse().unwrap_or(View::Dashboard)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_parse_back() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
    }

    #[test]
    fn unknown_identifier_falls_back_to_dashboard() {
        assert_eq!(
            "gradebook".parse::<View>(),
            Err(UnknownView("gradebook".to_string()))
        );
        assert_eq!(View::parse_or_dashboard("gradebook"), View::Dashboard);
        assert_eq!(View::parse_or_dashboard("settings"), View::Settings);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&View::AssignmentCreate).unwrap();
        assert_eq!(json, "\"assignment-create\"");
    }
}

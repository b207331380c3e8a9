//! Static team-member roster backing the assignment selector.

use serde::Serialize;

/// A selectable assignee — a static reference entry, not a full account.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// The built-in roster shown in the assignment selector.
pub fn default_roster() -> Vec<TeamMember> {
    [
        ("1", "John Doe", "john@example.com"),
        ("2", "Jane Smith", "jane@example.com"),
        ("3", "Mike Johnson", "mike@example.com"),
        ("4", "Sarah Wilson", "sarah@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_entries_are_distinct() {
        let roster = default_roster();
        assert_eq!(roster.len(), 4);
        let mut ids: Vec<&str> = roster.iter().map(|m| m.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), roster.len());
    }
}

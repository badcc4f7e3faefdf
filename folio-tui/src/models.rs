//! Domain models for the portfolio data file.
//!
//! These structs match the camelCase JSON document of project records and use
//! serde for deserialization. Only `id` is required: a missing or `null`
//! string reads as empty, and so does a missing or `null` array.

use serde::{Deserialize, Deserializer, Serialize};

/// Project identifier, unique within one data file
pub type ProjectId = i64;

/// A repository link shown as a button in the detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubLink {
    pub url: String,
    pub label: String,
}

/// Demo login shown in the detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
}

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub card_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github_links: Vec<GithubLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_features: Vec<String>,
}

/// Read an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Project {
    /// Live demo URL, treating an empty string as absent
    pub fn live_demo_url(&self) -> Option<&str> {
        non_empty(self.live_demo.as_deref())
    }

    /// Spec sheet URL, treating an empty string as absent
    pub fn pdf_url(&self) -> Option<&str> {
        non_empty(self.pdf_link.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Sort projects by id, newest (highest) first
pub fn sort_newest_first(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.id.cmp(&a.id));
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal project with only the required fields
    pub fn project(id: ProjectId, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            image: format!("images/{}.png", id),
            card_description: format!("{} in short", title),
            full_description: format!("{} in long form", title),
            tech: Vec::new(),
            github_links: Vec::new(),
            live_demo: None,
            pdf_link: None,
            credentials: None,
            key_features: Vec::new(),
        }
    }

    /// Project with every optional section filled in
    pub fn full_project(id: ProjectId, title: &str) -> Project {
        Project {
            tech: vec!["Rust".to_string(), "Tokio".to_string()],
            github_links: vec![
                GithubLink {
                    url: "https://github.com/example/frontend".to_string(),
                    label: "Frontend".to_string(),
                },
                GithubLink {
                    url: "https://github.com/example/backend".to_string(),
                    label: "Backend".to_string(),
                },
            ],
            live_demo: Some("https://demo.example.com".to_string()),
            pdf_link: Some("docs/spec.pdf".to_string()),
            credentials: Some(Credentials {
                email: "demo@example.com".to_string(),
                password: "hunter2".to_string(),
            }),
            key_features: vec![
                "Realtime sync".to_string(),
                "Offline mode".to_string(),
                "Audit trail".to_string(),
            ],
            ..project(id, title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 7,
            "title": "Inventory",
            "image": "img/inventory.png",
            "cardDescription": "Stock tracking",
            "fullDescription": "Tracks stock across warehouses",
            "tech": ["Rust", "Postgres"],
            "githubLinks": [{"url": "https://github.com/a/b", "label": "Source"}],
            "liveDemo": "https://inventory.example.com",
            "pdfLink": "inventory.pdf",
            "credentials": {"email": "a@b.c", "password": "pw"},
            "keyFeatures": ["Barcodes", "Reports"]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.card_description, "Stock tracking");
        assert_eq!(project.tech, vec!["Rust", "Postgres"]);
        assert_eq!(project.github_links[0].label, "Source");
        assert_eq!(project.live_demo_url(), Some("https://inventory.example.com"));
        assert_eq!(project.pdf_url(), Some("inventory.pdf"));
        assert_eq!(project.credentials.unwrap().email, "a@b.c");
        assert_eq!(project.key_features.len(), 2);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id": 1, "title": "Bare", "image": "x.png",
            "cardDescription": "c", "fullDescription": "f"}"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.tech.is_empty());
        assert!(project.github_links.is_empty());
        assert!(project.key_features.is_empty());
        assert!(project.credentials.is_none());
        assert_eq!(project.live_demo_url(), None);
    }

    #[test]
    fn test_empty_link_strings_are_absent() {
        let json = r#"{"id": 1, "title": "t", "liveDemo": "", "pdfLink": "  "}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.live_demo_url(), None);
        assert_eq!(project.pdf_url(), None);
    }

    #[test]
    fn test_null_arrays_read_as_empty() {
        let json = r#"{"id": 1, "title": "t", "tech": null, "githubLinks": null, "keyFeatures": null}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.tech.is_empty());
        assert!(project.github_links.is_empty());
        assert!(project.key_features.is_empty());
    }

    #[test]
    fn test_record_without_display_strings_is_kept() {
        let json = r#"[{"id": 2, "title": "ok"}, {"id": 1, "image": "x.png", "title": null}]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].title, "");
        assert_eq!(projects[1].image, "x.png");
    }

    #[test]
    fn test_partial_credentials() {
        let json = r#"{"id": 1, "credentials": {"email": "a@b.c"}}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        let credentials = project.credentials.unwrap();
        assert_eq!(credentials.email, "a@b.c");
        assert_eq!(credentials.password, "");
    }

    #[test]
    fn test_sort_newest_first() {
        let mut projects = vec![
            fixtures::project(1, "one"),
            fixtures::project(3, "three"),
            fixtures::project(2, "two"),
        ];
        sort_newest_first(&mut projects);
        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}

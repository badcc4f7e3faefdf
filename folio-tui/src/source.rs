//! Project data loader.
//!
//! Reads the static project document exactly once, either from a local file or
//! over HTTP, and hands the sorted records to the UI thread over a channel.
//! Runs in a separate Tokio task so a slow read never blocks rendering.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::sync::mpsc;

use crate::models::{sort_newest_first, Project};

/// Default location of the project document
pub const DEFAULT_SOURCE: &str = "projects.json";

/// Where the project document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    /// Local JSON file
    File(PathBuf),
    /// JSON served over HTTP(S)
    Http(String),
}

impl ProjectSource {
    /// Interpret a user-supplied location: URLs by scheme, everything else as a path
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ProjectSource::Http(trimmed.to_string())
        } else {
            ProjectSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for ProjectSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectSource::File(path) => write!(f, "{}", path.display()),
            ProjectSource::Http(url) => write!(f, "{}", url),
        }
    }
}

/// Loader for the project document
#[derive(Debug, Clone)]
pub struct ProjectLoader {
    client: Client,
    source: ProjectSource,
}

impl ProjectLoader {
    /// Create a loader; `timeout` bounds HTTP reads only
    pub fn new(source: ProjectSource, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, source })
    }

    pub fn source(&self) -> &ProjectSource {
        &self.source
    }

    /// Read, parse and sort the project document
    pub async fn load(&self) -> Result<Vec<Project>> {
        let mut projects = match &self.source {
            ProjectSource::File(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                parse_projects(&raw)?
            }
            ProjectSource::Http(url) => self.fetch(url).await?,
        };

        sort_newest_first(&mut projects);
        Ok(projects)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Project>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request for project document")?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Project document request failed: {} - {}",
                response.status(),
                response.text().await.unwrap_or_default()
            );
        }

        response
            .json()
            .await
            .context("Failed to parse project document response")
    }
}

/// Parse a JSON array of project records
pub fn parse_projects(raw: &str) -> Result<Vec<Project>> {
    serde_json::from_str(raw).context("Failed to parse project document")
}

/// Messages sent from the loader task to the UI thread
#[derive(Debug, Clone)]
pub enum LoadMessage {
    /// Projects were read and sorted
    Loaded(Vec<Project>),
    /// The read failed; the carousel stays empty
    Failed(String),
}

/// Perform the single load and report its outcome
pub async fn run_loader(loader: ProjectLoader, tx: mpsc::Sender<LoadMessage>) {
    tracing::info!(source = %loader.source(), "loading projects");

    let message = match loader.load().await {
        Ok(projects) => {
            tracing::info!(count = projects.len(), "projects loaded");
            LoadMessage::Loaded(projects)
        }
        Err(e) => {
            tracing::error!(error = ?e, "Error loading projects");
            LoadMessage::Failed(format!("{:#}", e))
        }
    };

    tx.send(message).await.ok();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_source_kinds() {
        assert_eq!(
            ProjectSource::parse("https://example.com/projects.json"),
            ProjectSource::Http("https://example.com/projects.json".to_string())
        );
        assert_eq!(
            ProjectSource::parse("data/projects.json"),
            ProjectSource::File(PathBuf::from("data/projects.json"))
        );
    }

    #[tokio::test]
    async fn test_load_file_sorts_descending() {
        let file = write_temp(
            r#"[{"id": 1, "title": "a"}, {"id": 3, "title": "c"}, {"id": 2, "title": "b"}]"#,
        );
        let loader = ProjectLoader::new(ProjectSource::File(file.path().into()), None).unwrap();

        let projects = loader.load().await.unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_load_malformed_file_fails() {
        let file = write_temp(r#"[{"id": "not a number""#);
        let loader = ProjectLoader::new(ProjectSource::File(file.path().into()), None).unwrap();

        let err = loader.load().await.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse project document"));
    }

    #[tokio::test]
    async fn test_run_loader_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let loader = ProjectLoader::new(ProjectSource::File(missing), None).unwrap();
        let (tx, mut rx) = mpsc::channel(1);

        run_loader(loader, tx).await;

        match rx.recv().await {
            Some(LoadMessage::Failed(msg)) => assert!(msg.contains("Failed to read")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    fn http_loader(server: &MockServer) -> ProjectLoader {
        let url = format!("{}/projects.json", server.uri());
        ProjectLoader::new(ProjectSource::parse(&url), None).unwrap()
    }

    #[tokio::test]
    async fn test_load_http_sorts_descending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"id": 2, "title": "b"}, {"id": 7, "title": "g"}, {"id": 4, "title": "d"}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let projects = http_loader(&server).load().await.unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![7, 4, 2]);
    }

    #[tokio::test]
    async fn test_load_http_error_status_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let err = http_loader(&server).load().await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_load_http_malformed_body_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": "))
            .mount(&server)
            .await;

        let err = http_loader(&server).load().await.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse project document response"));
    }

    #[tokio::test]
    async fn test_run_loader_reports_projects() {
        let file = write_temp(r#"[{"id": 5, "title": "only"}]"#);
        let loader = ProjectLoader::new(ProjectSource::File(file.path().into()), None).unwrap();
        let (tx, mut rx) = mpsc::channel(1);

        run_loader(loader, tx).await;

        match rx.recv().await {
            Some(LoadMessage::Loaded(projects)) => assert_eq!(projects[0].title, "only"),
            other => panic!("expected projects, got {:?}", other),
        }
    }
}

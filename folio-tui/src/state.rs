//! Portfolio data owned by the application.
//!
//! The project list is installed once after the loader reports and is read-only
//! for the rest of the session.

use crate::models::{Project, ProjectId};

/// Progress of the single project load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Default)]
pub struct PortfolioState {
    projects: Vec<Project>,
    status: LoadStatus,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the sorted project list. Returns false if a load already settled.
    pub fn install(&mut self, projects: Vec<Project>) -> bool {
        if self.status != LoadStatus::Pending {
            tracing::warn!(status = ?self.status, "ignoring second project install");
            return false;
        }
        self.projects = projects;
        self.status = LoadStatus::Ready;
        true
    }

    /// Record a failed load; the list stays empty
    pub fn mark_failed(&mut self) {
        if self.status == LoadStatus::Pending {
            self.status = LoadStatus::Failed;
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

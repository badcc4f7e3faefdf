//! Project detail modal.
//!
//! Two visible phases: `Open`, and `Closing` while the panel fades out. The
//! page's scroll lock is taken on open and only released once the fade-out
//! delay has elapsed and the modal is fully hidden.

use std::time::{Duration, Instant};

use crate::models::{Credentials, Project, ProjectId};
use crate::page::ScrollLock;
use crate::state::PortfolioState;

/// Modal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        project_id: ProjectId,
    },
    /// Fading out; hidden once the close delay has passed
    Closing {
        project_id: ProjectId,
        since: Instant,
    },
}

/// Kind of link button in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Repository,
    LiveDemo,
    Specs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub kind: LinkKind,
    pub label: String,
    pub url: String,
}

/// Everything the detail panel shows for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub project_id: ProjectId,
    pub title: String,
    pub image: String,
    pub overview: String,
    /// One list item per entry; the Key Features heading is always shown
    pub features: Vec<String>,
    /// One badge per entry; the Tech Stack heading is always shown
    pub tech: Vec<String>,
    pub credentials: Option<Credentials>,
    /// Repository links first, then live demo, then spec sheet
    pub links: Vec<LinkButton>,
}

impl DetailPanel {
    pub fn from_project(project: &Project) -> Self {
        let mut links: Vec<LinkButton> = project
            .github_links
            .iter()
            .map(|link| LinkButton {
                kind: LinkKind::Repository,
                label: link.label.clone(),
                url: link.url.clone(),
            })
            .collect();
        if let Some(url) = project.live_demo_url() {
            links.push(LinkButton {
                kind: LinkKind::LiveDemo,
                label: "Live Demo →".to_string(),
                url: url.to_string(),
            });
        }
        if let Some(url) = project.pdf_url() {
            links.push(LinkButton {
                kind: LinkKind::Specs,
                label: "View Specs".to_string(),
                url: url.to_string(),
            });
        }

        Self {
            project_id: project.id,
            title: project.title.clone(),
            image: project.image.clone(),
            overview: project.full_description.clone(),
            features: project.key_features.clone(),
            tech: project.tech.clone(),
            credentials: project.credentials.clone(),
            links,
        }
    }
}

/// Drives the modal state machine and owns the rendered panel
#[derive(Debug, Clone)]
pub struct ModalController {
    state: ModalState,
    close_delay: Duration,
    panel: Option<DetailPanel>,
    /// Vertical scroll inside the panel body
    scroll: u16,
}

impl ModalController {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            state: ModalState::Closed,
            close_delay,
            panel: None,
            scroll: 0,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn panel(&self) -> Option<&DetailPanel> {
        self.panel.as_ref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Whether the modal occupies the screen (open or fading out)
    pub fn is_visible(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.state, ModalState::Closing { .. })
    }

    /// Show the panel for `project_id`. Unknown ids leave the modal untouched.
    pub fn open(
        &mut self,
        project_id: ProjectId,
        portfolio: &PortfolioState,
        lock: &mut ScrollLock,
    ) -> bool {
        let Some(project) = portfolio.find(project_id) else {
            tracing::debug!(project_id, "no project for details request");
            return false;
        };

        self.panel = Some(DetailPanel::from_project(project));
        self.scroll = 0;
        self.state = ModalState::Open { project_id };
        lock.lock();
        tracing::debug!(project_id, "modal opened");
        true
    }

    /// Start fading out. Only an open modal reacts.
    pub fn close(&mut self, now: Instant) -> bool {
        match self.state {
            ModalState::Open { project_id } => {
                self.state = ModalState::Closing {
                    project_id,
                    since: now,
                };
                tracing::debug!(project_id, "modal closing");
                true
            }
            ModalState::Closing { .. } | ModalState::Closed => false,
        }
    }

    /// Finish a fade-out whose delay has elapsed. Returns true when the modal hid.
    pub fn tick(&mut self, now: Instant, lock: &mut ScrollLock) -> bool {
        let ModalState::Closing { since, .. } = self.state else {
            return false;
        };
        if now.duration_since(since) < self.close_delay {
            return false;
        }

        self.state = ModalState::Closed;
        self.panel = None;
        self.scroll = 0;
        lock.release();
        tracing::debug!("modal hidden");
        true
    }

    /// Scroll the panel body; clamping to content happens at render time
    pub fn scroll_panel(&mut self, delta: i32) {
        if !matches!(self.state, ModalState::Open { .. }) {
            return;
        }
        self.scroll = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32) as u16;
    }

    /// Clamp the panel scroll to the rendered body height
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}

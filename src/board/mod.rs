//! Client-held task board.
//!
//! Each client session owns exactly one board for its lifetime; nothing else
//! mutates it, so the board is a plain value with `&mut self` operations.
//! Tasks keep insertion order and only ever change by toggling their
//! two-state status flag.

pub mod roster;

pub use roster::TeamMember;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

// ── Task ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The only permitted transition: pending ⇄ completed.
    fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A unit of assigned work with a two-state completion flag.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    /// Unique per board instance (UUID v4).
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    /// Local time of day, as entered (e.g. `"14:00"`).
    pub time: String,
    pub assigned_to: String,
    pub assigned_by: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for [`TaskBoard::add_task`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub assigned_to: String,
    pub assigned_by: String,
}

// ── Filtering ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => task.status == TaskStatus::Pending,
            TaskFilter::Completed => task.status == TaskStatus::Completed,
        }
    }
}

/// Derived pending/completed tally — computed from current contents, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub pending: usize,
    pub completed: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("missing required task field: {0}")]
    Validation(&'static str),
    #[error("task not found: {0}")]
    NotFound(String),
}

// ── Board ────────────────────────────────────────────────────────────────────

/// One session's task collection, in insertion order.
#[derive(Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task. `name`, `time`, and `assigned_to` must be non-empty;
    /// validation happens before anything is stored. New tasks start
    /// pending with a fresh unique id.
    pub fn add_task(&mut self, new: NewTask) -> Result<Task, BoardError> {
        if new.name.is_empty() {
            return Err(BoardError::Validation("name"));
        }
        if new.time.is_empty() {
            return Err(BoardError::Validation("time"));
        }
        if new.assigned_to.is_empty() {
            return Err(BoardError::Validation("assigned_to"));
        }

        let task = Task {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            date: new.date,
            time: new.time,
            assigned_to: new.assigned_to,
            assigned_by: new.assigned_by,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        };
        info!(id = %task.id, assigned_to = %task.assigned_to, "task created");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flip a task between pending and completed.
    pub fn toggle_status(&mut self, id: &str) -> Result<Task, BoardError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BoardError::NotFound(id.to_string()))?;
        task.status = task.status.toggled();
        match task.status {
            TaskStatus::Completed => info!(id = %task.id, name = %task.name, "task completed"),
            TaskStatus::Pending => info!(id = %task.id, name = %task.name, "task reopened"),
        }
        Ok(task.clone())
    }

    /// Tasks matching `filter`, in insertion order.
    pub fn list(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Pending/completed tally over the current contents.
    pub fn counts(&self) -> TaskCounts {
        let pending = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count();
        TaskCounts {
            pending,
            completed: self.tasks.len() - pending,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

/// Roster violations surfaced to the caller. The display text doubles as the
/// HTTP `detail` field, so the wording is part of the API contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student not registered for this activity")]
    NotRegistered,
}

/// In-memory directory of all activities, keyed by activity name.
///
/// This is the only mutable state in the system. The handle is cheap to
/// clone and is handed to request handlers through axum state, the same way
/// a connection pool would be. Nothing is persisted across restarts.
#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<HashMap<String, Activity>>>,
}

impl ActivityDirectory {
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Directory preloaded with the Mergington seed catalog.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of the full catalog for serialization.
    pub async fn snapshot(&self) -> HashMap<String, Activity> {
        self.inner.read().await.clone()
    }

    /// Append `email` to the activity's roster.
    ///
    /// Lookup, duplicate check and append all happen under a single write
    /// guard, so two racing signups cannot register the same student twice.
    /// `max_participants` is informational only: signups past capacity are
    /// accepted.
    pub async fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut directory = self.inner.write().await;
        let activity = directory
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's roster.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut directory = self.inner.write().await;
        let activity = directory
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotRegistered)?;

        activity.participants.remove(pos);
        Ok(())
    }
}

fn seed_activities() -> HashMap<String, Activity> {
    fn activity(
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Activity {
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|s| s.to_string()).collect(),
        }
    }

    HashMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ])
}

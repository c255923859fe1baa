use std::collections::HashMap;

use crate::models::Activity;
use crate::store::{ActivityDirectory, DirectoryError};

/// Full catalog as name -> record, ready for serialization.
pub async fn list_activities(directory: &ActivityDirectory) -> HashMap<String, Activity> {
    directory.snapshot().await
}

/// Sign a student up for an activity and build the confirmation message.
pub async fn sign_up_student(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.sign_up(activity_name, email).await?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove a student from an activity's roster and build the confirmation message.
pub async fn unregister_student(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.unregister(activity_name, email).await?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn confirmation_messages_quote_email_and_activity() {
        let directory = ActivityDirectory::seeded();

        let message = sign_up_student(&directory, "Chess Club", "test@mergington.edu")
            .await
            .unwrap();
        assert_eq!(message, "Signed up test@mergington.edu for Chess Club");

        let message = unregister_student(&directory, "Chess Club", "test@mergington.edu")
            .await
            .unwrap();
        assert_eq!(message, "Unregistered test@mergington.edu from Chess Club");
    }

    #[tokio::test]
    async fn errors_pass_through_from_the_directory() {
        let directory = ActivityDirectory::seeded();

        assert_eq!(
            sign_up_student(&directory, "Nope", "test@mergington.edu").await,
            Err(DirectoryError::ActivityNotFound)
        );
        assert_eq!(
            unregister_student(&directory, "Chess Club", "test@mergington.edu").await,
            Err(DirectoryError::NotRegistered)
        );
    }
}

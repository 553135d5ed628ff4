//! Built-in demonstration data

use crate::core::entity::Status;
use crate::core::manager::{ManagerError, PrdManager};

/// (title, description, author, tags)
const SAMPLE_PRDS: &[(&str, &str, &str, &[&str])] = &[
    ("User Authentication System", "Implement secure login and registration", "Dev Team", &["security", "authentication"]),
    ("Dark Mode Theme", "Add dark theme option for better UX", "UX Team", &["ui", "theme"]),
    ("Payment Gateway Integration", "Integrate secure payment processing", "Product Team", &["payment", "integration"]),
    ("API Rate Limiting", "Implement API rate limiting for security", "Backend Team", &["api", "security"]),
    ("Mobile App Redesign", "Complete redesign of mobile application", "Design Team", &["mobile", "design"]),
    ("Real-time Notifications", "Add real-time notification system", "Full Stack Team", &["notifications", "realtime"]),
    ("Performance Optimization", "Optimize database queries and caching", "Database Team", &["performance", "database"]),
    ("Multi-language Support", "Add internationalization support", "Localization Team", &["i18n", "localization"]),
];

/// (position, status, completion)
const PROGRESS: &[(usize, Status, Option<i64>)] = &[
    (1, Status::InReview, None),
    (2, Status::Approved, None),
    (3, Status::InDevelopment, Some(65)),
    (4, Status::Testing, Some(90)),
    (5, Status::Implemented, Some(100)),
];

/// Seed a manager with eight PRDs in assorted lifecycle states
pub fn load_sample_data(manager: &mut PrdManager) -> Result<(), ManagerError> {
    let mut ids = Vec::with_capacity(SAMPLE_PRDS.len());
    for (title, description, author, tags) in SAMPLE_PRDS {
        let id = manager.create_record(*title, *description, *author);
        for tag in *tags {
            manager.add_tag(id.as_str(), tag)?;
        }
        ids.push(id);
    }

    for &(pos, status, completion) in PROGRESS {
        let id = ids[pos].as_str();
        manager.update_status(id, status)?;
        if let Some(value) = completion {
            manager.update_completion(id, value)?;
        }
    }
    Ok(())
}

/// A manager pre-populated with [`load_sample_data`]
pub fn sample_manager() -> Result<PrdManager, ManagerError> {
    let mut manager = PrdManager::new();
    load_sample_data(&mut manager)?;
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_shape() {
        let manager = sample_manager().unwrap();
        assert_eq!(manager.len(), 8);
        assert_eq!(manager.by_status(Status::Draft).len(), 3);
        assert_eq!(manager.by_status(Status::Implemented).len(), 1);

        let analytics = manager.analytics();
        assert_eq!(analytics.tag_frequency["security"], 2);
        assert_eq!(analytics.average_completion, 255.0 / 8.0);
        assert_eq!(manager.search("authentication").len(), 1);
    }

    #[test]
    fn test_load_into_populated_manager() {
        let mut manager = PrdManager::new();
        manager.create_record("Existing", "", "me");
        load_sample_data(&mut manager).unwrap();
        assert_eq!(manager.len(), 9);
        assert_eq!(manager.records()[0].title, "Existing");
        assert_eq!(manager.by_status(Status::Testing)[0].completion_percentage, 90);
    }
}

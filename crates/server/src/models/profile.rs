//! Profile domain types.

use serde::{Deserialize, Serialize};

/// The site owner's profile. A singleton: exactly one row exists once the
/// store is seeded, always with id 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Fixed singleton id (always 1).
    pub id: i64,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub pitch: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Availability status, free text (e.g. "DISPONIBLE").
    pub status: String,
}

/// A partial profile update. Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub pitch: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub status: Option<String>,
}

impl ProfilePatch {
    /// Merge the supplied fields into `profile`, leaving omitted ones unchanged.
    pub fn apply(&self, profile: &mut Profile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(title) = &self.title {
            profile.title = title.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            profile.subtitle = subtitle.clone();
        }
        if let Some(pitch) = &self.pitch {
            profile.pitch = pitch.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(linkedin) = &self.linkedin {
            profile.linkedin = linkedin.clone();
        }
        if let Some(github) = &self.github {
            profile.github = github.clone();
        }
        if let Some(status) = &self.status {
            profile.status = status.clone();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            id: 1,
            name: "Jane".to_string(),
            title: "Engineer".to_string(),
            subtitle: "Sub".to_string(),
            pitch: "Pitch".to_string(),
            email: "jane@example.com".to_string(),
            linkedin: "linkedin.com/in/jane".to_string(),
            github: "github.com/jane".to_string(),
            status: "DISPONIBLE".to_string(),
        }
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let mut profile = sample_profile();
        let patch = ProfilePatch {
            title: Some("Senior Engineer".to_string()),
            status: Some("OCUPADO".to_string()),
            ..ProfilePatch::default()
        };

        patch.apply(&mut profile);

        assert_eq!(profile.title, "Senior Engineer");
        assert_eq!(profile.status, "OCUPADO");
        // Everything else stays untouched
        assert_eq!(profile.name, "Jane");
        assert_eq!(profile.email, "jane@example.com");
    }

    #[test]
    fn test_empty_patch_is_a_noop() {
        let mut profile = sample_profile();
        let before = profile.clone();
        ProfilePatch::default().apply(&mut profile);
        assert_eq!(profile, before);
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: ProfilePatch = serde_json::from_str(r#"{"name":"New Name"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("New Name"));
        assert!(patch.title.is_none());
    }
}

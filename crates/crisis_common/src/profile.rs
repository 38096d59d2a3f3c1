//! Teacher profile attached to advice requests.

use serde::{Deserialize, Serialize};

/// Classroom context the companion app sends along with most requests.
///
/// Every field is optional on the wire; the app fills in whatever the teacher
/// has configured. The profile is passed through on each call and never
/// stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherProfile {
    #[serde(default)]
    pub teacher_name: String,

    #[serde(default)]
    pub grade_levels: Vec<String>,

    #[serde(default = "default_class_size")]
    pub class_size: u32,

    #[serde(default)]
    pub subjects: Vec<String>,

    #[serde(default)]
    pub available_resources: Vec<String>,

    #[serde(default)]
    pub teaching_environment: Vec<String>,

    #[serde(default)]
    pub strategies_that_worked: Vec<String>,

    #[serde(default)]
    pub strategies_that_failed: Vec<String>,

    #[serde(default)]
    pub additional_notes: String,
}

fn default_class_size() -> u32 {
    30
}

impl Default for TeacherProfile {
    fn default() -> Self {
        Self {
            teacher_name: String::new(),
            grade_levels: Vec::new(),
            class_size: default_class_size(),
            subjects: Vec::new(),
            available_resources: Vec::new(),
            teaching_environment: Vec::new(),
            strategies_that_worked: Vec::new(),
            strategies_that_failed: Vec::new(),
            additional_notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_with_defaults() {
        let profile: TeacherProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.teacher_name, "");
        assert_eq!(profile.class_size, 30);
        assert!(profile.grade_levels.is_empty());
        assert!(profile.strategies_that_failed.is_empty());
    }

    #[test]
    fn populated_profile_roundtrips() {
        let json = r#"{
            "teacher_name": "Ms. Rivera",
            "grade_levels": ["3rd", "4th"],
            "class_size": 24,
            "subjects": ["Math"],
            "strategies_that_failed": ["Yelling"]
        }"#;
        let profile: TeacherProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.teacher_name, "Ms. Rivera");
        assert_eq!(profile.class_size, 24);
        assert_eq!(profile.grade_levels, vec!["3rd", "4th"]);
        assert_eq!(profile.strategies_that_failed, vec!["Yelling"]);
    }
}

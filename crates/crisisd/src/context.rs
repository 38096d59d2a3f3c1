//! Teacher-profile context rendering.
//!
//! Pure text formatting: the profile becomes a labeled block injected ahead
//! of every task prompt. No side effects, no failure modes.

use crisis_common::TeacherProfile;

/// Sent when no usable profile accompanies a request.
const NO_PROFILE_CONTEXT: &str = "No teacher profile provided. Give generic advice.";

fn list_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}

fn text_or<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() {
        placeholder
    } else {
        text
    }
}

/// Render the profile into the context block every prompt starts with.
///
/// A missing profile, or one without a name, yields a short instruction to
/// give generic advice instead.
pub fn profile_context(profile: Option<&TeacherProfile>) -> String {
    let Some(profile) = profile else {
        return NO_PROFILE_CONTEXT.to_string();
    };
    if profile.teacher_name.is_empty() {
        return NO_PROFILE_CONTEXT.to_string();
    }

    format!(
        "\nTEACHER CONTEXT:\n\
         - Name: {}\n\
         - Grade Levels: {}\n\
         - Class Size: {} students\n\
         - Subjects: {}\n\
         - Available Resources: {}\n\
         - Teaching Environment: {}\n\
         - Strategies That Work: {}\n\
         - Strategies To AVOID: {}\n\
         - Additional Notes: {}\n\
         \nIMPORTANT: Personalize your response based on this context. Avoid suggesting strategies they marked as failed.\n",
        profile.teacher_name,
        list_or(&profile.grade_levels, "Not specified"),
        profile.class_size,
        list_or(&profile.subjects, "Not specified"),
        list_or(&profile.available_resources, "Limited"),
        list_or(&profile.teaching_environment, "Standard classroom"),
        list_or(&profile.strategies_that_worked, "None specified"),
        list_or(&profile.strategies_that_failed, "None specified"),
        text_or(&profile.additional_notes, "None"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_gives_generic_instruction() {
        assert_eq!(
            profile_context(None),
            "No teacher profile provided. Give generic advice."
        );
    }

    #[test]
    fn unnamed_profile_gives_generic_instruction() {
        let profile = TeacherProfile::default();
        assert_eq!(
            profile_context(Some(&profile)),
            "No teacher profile provided. Give generic advice."
        );
    }

    #[test]
    fn empty_fields_render_fixed_placeholders() {
        let profile = TeacherProfile {
            teacher_name: "Mr. Okafor".to_string(),
            ..TeacherProfile::default()
        };
        let context = profile_context(Some(&profile));

        assert!(context.contains("- Name: Mr. Okafor"));
        assert!(context.contains("- Grade Levels: Not specified"));
        assert!(context.contains("- Class Size: 30 students"));
        assert!(context.contains("- Subjects: Not specified"));
        assert!(context.contains("- Available Resources: Limited"));
        assert!(context.contains("- Teaching Environment: Standard classroom"));
        assert!(context.contains("- Strategies That Work: None specified"));
        assert!(context.contains("- Strategies To AVOID: None specified"));
        assert!(context.contains("- Additional Notes: None"));
    }

    #[test]
    fn populated_fields_join_with_comma_separator() {
        let profile = TeacherProfile {
            teacher_name: "Ms. Rivera".to_string(),
            grade_levels: vec!["3rd".to_string(), "4th".to_string()],
            class_size: 24,
            subjects: vec!["Math".to_string(), "Science".to_string()],
            available_resources: vec!["Whiteboard".to_string(), "Projector".to_string()],
            teaching_environment: vec!["Open plan".to_string()],
            strategies_that_worked: vec!["Countdowns".to_string()],
            strategies_that_failed: vec!["Yelling".to_string(), "Detention".to_string()],
            additional_notes: "Two students with ADHD".to_string(),
        };
        let context = profile_context(Some(&profile));

        assert!(context.contains("- Grade Levels: 3rd, 4th"));
        assert!(context.contains("- Class Size: 24 students"));
        assert!(context.contains("- Subjects: Math, Science"));
        assert!(context.contains("- Available Resources: Whiteboard, Projector"));
        assert!(context.contains("- Strategies To AVOID: Yelling, Detention"));
        assert!(context.contains("- Additional Notes: Two students with ADHD"));
        assert!(context.contains("IMPORTANT: Personalize your response"));
    }

    #[test]
    fn context_always_closes_with_personalization_instruction() {
        let profile = TeacherProfile {
            teacher_name: "T".to_string(),
            ..TeacherProfile::default()
        };
        let context = profile_context(Some(&profile));
        assert!(context.ends_with(
            "IMPORTANT: Personalize your response based on this context. Avoid suggesting strategies they marked as failed.\n"
        ));
    }
}

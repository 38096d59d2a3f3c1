//! Canned responses, one per capability.
//!
//! Each literal must stay structurally identical to the schema the client
//! renders for that endpoint: same top-level keys, same nesting, same
//! cardinality. The client cannot tell a canned response from a model one.

use crisis_common::{EnhanceStrategyRequest, FeedbackOutcome};
use serde_json::{json, Value};

pub fn crisis() -> Value {
    json!({
        "action": "Stay calm. Count to 5 silently.",
        "strategy": "Use proximity - walk toward the disruption."
    })
}

/// Three solutions, five steps each, mirroring the quick-situation schema.
pub fn quick_situation() -> Value {
    json!({
        "solutions": [
            {
                "type": "tactic",
                "title": "The Pause",
                "desc": "Stop everything and wait in complete silence.",
                "steps": ["1. Stop mid-sentence.", "2. Stand still.", "3. Wait.", "4. Make eye contact.", "5. Resume when ready."]
            },
            {
                "type": "tactic",
                "title": "Proximity",
                "desc": "Walk toward the problem area while teaching.",
                "steps": ["1. Keep teaching.", "2. Walk slowly.", "3. Stand near disruption.", "4. Wait 30 seconds.", "5. Move away."]
            },
            {
                "type": "energizer",
                "title": "Quick Reset",
                "desc": "30-second brain break to refocus energy.",
                "steps": ["1. Everyone stand.", "2. 5 jumping jacks.", "3. Touch toes.", "4. Deep breath.", "5. Sit down silently."]
            }
        ]
    })
}

/// Echoes the teacher's own strategy back, unadapted.
pub fn enhance_strategy(request: &EnhanceStrategyRequest) -> Value {
    json!({
        "adapted_title": request.strategy_title,
        "adapted_desc": "Use this strategy as described.",
        "adapted_steps": request.strategy_steps,
        "pro_tips": ["Practice this before using in class.", "Stay calm and consistent."],
        "common_mistakes": ["Moving too fast.", "Breaking eye contact."]
    })
}

/// Outcome-dependent: encouragement when the advice worked, a safe
/// alternative when it failed.
pub fn feedback(outcome: FeedbackOutcome) -> Value {
    match outcome {
        FeedbackOutcome::Worked => json!({
            "analysis": "Great! This strategy matched your classroom dynamics well.",
            "alternative": "Consider using this as your go-to technique for similar situations.",
            "prevention": "Build this into your daily routine to prevent future issues."
        }),
        FeedbackOutcome::Failed => json!({
            "analysis": "This strategy may not fit your specific classroom context.",
            "alternative": "Try a non-verbal approach like proximity or the stare technique.",
            "prevention": "Set clearer expectations at the start of class."
        }),
    }
}

pub fn energizer() -> Value {
    json!({
        "title": "Quick Stand & Share",
        "desc": "Students stand and share one thing they learned.",
        "duration": "3 minutes",
        "steps": [
            "1. Everyone stands up.",
            "2. Find a partner nearby.",
            "3. Share one thing you learned today.",
            "4. Switch partners.",
            "5. Sit when done."
        ],
        "variations": [
            "Do it silently with gestures only.",
            "Write the answer first, then share."
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crisis_fallback_has_exact_key_set() {
        let value = crisis();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("action"));
        assert!(obj.contains_key("strategy"));
    }

    #[test]
    fn quick_situation_fallback_has_three_solutions_of_five_steps() {
        let value = quick_situation();
        let solutions = value["solutions"].as_array().unwrap();
        assert_eq!(solutions.len(), 3);
        for solution in solutions {
            assert_eq!(solution["steps"].as_array().unwrap().len(), 5);
            let kind = solution["type"].as_str().unwrap();
            assert!(kind == "tactic" || kind == "energizer");
        }
    }

    #[test]
    fn enhance_fallback_echoes_the_request() {
        let request = EnhanceStrategyRequest {
            strategy_title: "Silent Signal".to_string(),
            strategy_steps: vec!["Raise hand".to_string(), "Wait".to_string()],
            profile: None,
        };
        let value = enhance_strategy(&request);
        assert_eq!(value["adapted_title"], "Silent Signal");
        assert_eq!(value["adapted_steps"].as_array().unwrap().len(), 2);
        assert_eq!(value["pro_tips"].as_array().unwrap().len(), 2);
        assert_eq!(value["common_mistakes"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn feedback_fallback_differs_by_outcome() {
        let worked = feedback(FeedbackOutcome::Worked);
        let failed = feedback(FeedbackOutcome::Failed);
        assert_ne!(worked, failed);
        for value in [worked, failed] {
            let obj = value.as_object().unwrap();
            assert!(obj.contains_key("analysis"));
            assert!(obj.contains_key("alternative"));
            assert!(obj.contains_key("prevention"));
        }
    }

    #[test]
    fn energizer_fallback_has_five_steps_and_two_variations() {
        let value = energizer();
        assert_eq!(value["title"], "Quick Stand & Share");
        assert_eq!(value["steps"].as_array().unwrap().len(), 5);
        assert_eq!(value["variations"].as_array().unwrap().len(), 2);
    }
}

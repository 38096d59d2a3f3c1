//! System instructions and prompt composition, one block per capability.
//!
//! Composition order is fixed: profile context first, then the task-specific
//! content. The model is sensitive to prompt structure, so composers never
//! reorder sections.

use crisis_common::{FeedbackOutcome, TeacherProfile};

use crate::context::profile_context;

/// Crisis solver: immediate action plus prevention strategy.
pub const CRISIS_SYSTEM_INSTRUCTION: &str = r#"You are an expert teacher mentor with 30 years of classroom experience.
You help teachers handle classroom crises in real-time.

Input: A classroom problem description + optional teacher context.
Output: JSON with 2 keys:
1. 'action': Immediate command to control the class (max 10 words, imperative tone).
2. 'strategy': Pedagogical teaching strategy to prevent recurrence (max 20 words).

Rules:
- Be calm and professional
- Never suggest yelling or punitive measures
- Prioritize non-verbal techniques when possible
- Consider the teacher's context if provided
- If they said a strategy failed, NEVER suggest it

Example JSON: {"action": "Stop. Wait for complete silence.", "strategy": "Use proximity control - walk toward the noise source while teaching."}"#;

/// Quick situations: three tactic/energizer solutions. The energizer
/// capability reuses this instruction; its prompt carries its own output keys.
pub const SITUATION_SYSTEM_INSTRUCTION: &str = r#"You are an expert teacher mentor providing quick classroom solutions.

Input: A specific classroom situation type + optional teacher context.
Output: JSON with 3 solutions, each containing:
- 'type': Either "tactic" (behavior management) or "energizer" (engagement activity)
- 'title': Short name (2-4 words)
- 'desc': Brief description (10-15 words)
- 'steps': Array of exactly 5 step-by-step instructions

Rules:
- Match solution type to the situation
- For "too_loud" or "one_disruptor" → prefer tactics
- For "low_energy" or "finished_early" → prefer energizers
- For "transition_chaos" → mix of both
- Consider teacher's resources and environment
- Avoid strategies they marked as failed

Example JSON:
{
  "solutions": [
    {
      "type": "tactic",
      "title": "The Freeze",
      "desc": "Stop everything until students mirror your stillness.",
      "steps": ["1. Stop mid-sentence.", "2. Stand completely still.", "3. Wait silently.", "4. Make eye contact with disruptors.", "5. Resume when silent."]
    }
  ]
}"#;

/// Strategy enhancer: adapt a library strategy to the teacher's classroom.
pub const ENHANCER_SYSTEM_INSTRUCTION: &str = r#"You are an expert teacher mentor who adapts strategies to specific classroom contexts.

Input: A teaching strategy + teacher's classroom context.
Output: JSON with enhanced/adapted version:
- 'adapted_title': Modified title if needed
- 'adapted_desc': Description tailored to their context
- 'adapted_steps': 5 steps modified for their specific situation
- 'pro_tips': 2-3 expert tips for their specific context
- 'common_mistakes': 2 mistakes to avoid

Consider their grade level, class size, resources, and environment when adapting."#;

/// Feedback analysis: why the advice worked or failed, and what next.
pub const FEEDBACK_SYSTEM_INSTRUCTION: &str = r#"You are a reflective teacher mentor analyzing what worked and what didn't.

Input: A crisis situation, the action/strategy given, and whether it worked or failed.
Output: JSON with:
- 'analysis': Why it likely worked/failed (2-3 sentences)
- 'alternative': If failed, suggest a better approach. If worked, suggest how to build on it.
- 'prevention': How to prevent this crisis in the future (1-2 sentences)"#;

/// Canonical descriptions for the app's quick filter chips. Unrecognized
/// tags pass through verbatim as free text.
fn situation_description(situation: &str) -> String {
    match situation {
        "too_loud" => {
            "The entire class is too loud and chaotic. I need silence immediately.".to_string()
        }
        "one_disruptor" => {
            "One student is disrupting the entire class and seeking attention.".to_string()
        }
        "low_energy" => {
            "The class is sleepy, bored, and has low energy. I need to wake them up.".to_string()
        }
        "transition_chaos" => {
            "Students are chaotic during a transition between activities.".to_string()
        }
        "finished_early" => {
            "Students finished the activity early and I need to fill time productively.".to_string()
        }
        other => format!("Classroom situation: {}", other),
    }
}

pub fn crisis_prompt(profile: Option<&TeacherProfile>, transcript: &str) -> String {
    format!("{}\n\nCRISIS: {}", profile_context(profile), transcript)
}

pub fn quick_situation_prompt(profile: Option<&TeacherProfile>, situation: &str) -> String {
    format!(
        "{}\n\nSITUATION: {}\n\nProvide exactly 3 solutions.",
        profile_context(profile),
        situation_description(situation)
    )
}

pub fn enhance_strategy_prompt(
    profile: Option<&TeacherProfile>,
    strategy_title: &str,
    strategy_steps: &[String],
) -> String {
    format!(
        "{}\n\nStrategy: {}\nSteps: {}\n\nAdapt this strategy for this specific teacher's context.",
        profile_context(profile),
        strategy_title,
        strategy_steps.join(", ")
    )
}

pub fn feedback_prompt(
    profile: Option<&TeacherProfile>,
    crisis_transcript: &str,
    action_given: &str,
    strategy_given: &str,
    feedback: FeedbackOutcome,
) -> String {
    format!(
        "\n{}\n\nCRISIS: {}\nACTION GIVEN: {}\nSTRATEGY GIVEN: {}\nRESULT: {}\n\nAnalyze why this {} and provide guidance.\n",
        profile_context(profile),
        crisis_transcript,
        action_given,
        strategy_given,
        feedback,
        feedback.verb()
    )
}

pub fn energizer_prompt(profile: Option<&TeacherProfile>) -> String {
    format!(
        "\n{}\n\nGenerate a unique, fun, 3-5 minute classroom energizer activity that:\n\
         1. Gets students moving or talking\n\
         2. Can be done with their available resources\n\
         3. Is appropriate for their grade level\n\
         4. Relates to their subject if possible\n\
         \nOutput JSON with:\n\
         - 'title': Creative name (2-4 words)\n\
         - 'desc': Brief description (10-15 words)\n\
         - 'duration': Time needed (e.g., \"3 minutes\")\n\
         - 'steps': Array of 5 clear steps\n\
         - 'variations': 2 alternative versions\n",
        profile_context(profile)
    )
}

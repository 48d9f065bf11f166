//! The fixed instruction sent with every model request, rendered from the
//! action vocabulary and theory tables so the two never drift apart.

use crate::command::Action;
use crate::theory::{BassPattern, ScaleType, NOTES};

/// Render the system instruction.
pub fn instruction() -> String {
    let mut out = String::from(
        "You are an Ableton Live control system. \
         Convert natural language commands into exactly one action.\n\
         Available actions:\n",
    );

    for action in Action::ALL {
        let params: Vec<&str> = action.parameter_names().to_vec();
        out.push_str(&format!("- {}({})\n", action.name(), params.join(", ")));
    }

    let scales: Vec<&str> = ScaleType::ALL.iter().map(|s| s.name()).collect();
    let patterns: Vec<&str> = BassPattern::ALL.iter().map(|p| p.name()).collect();
    out.push_str("\nFor musical commands, understand:\n");
    out.push_str(&format!("- Notes: {}\n", NOTES.join(", ")));
    out.push_str(&format!("- Scales: {}\n", scales.join(", ")));
    out.push_str(&format!("- Patterns: {}\n", patterns.join(", ")));

    out.push_str(
        "\nRespond with JSON only, containing 'function' and 'parameters'.\n\
         Example: {\"function\": \"create_bassline\", \"parameters\": \
         {\"root\": \"G\", \"scale_type\": \"minor\", \"pattern\": \"walking\", \"length\": 4}}\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_action_with_parameters() {
        let text = instruction();
        for action in Action::ALL {
            assert!(text.contains(action.name()), "missing {action}");
        }
        assert!(text.contains("set_track_volume(track, volume)"));
        assert!(text.contains("start_playback()"));
    }

    #[test]
    fn lists_theory_vocabulary() {
        let text = instruction();
        assert!(text.contains("C#"));
        assert!(text.contains("harmonic_minor"));
        assert!(text.contains("arpeggio"));
    }

    #[test]
    fn stable_between_calls() {
        assert_eq!(instruction(), instruction());
    }
}

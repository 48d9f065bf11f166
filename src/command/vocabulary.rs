//! The fixed trigger table for mixer and transport commands.

use super::Action;

/// Substring whose presence in the text selects the bassline action.
pub const BASSLINE_TRIGGER: &str = "bassline";

/// Parameters of [`Action::CreateBassline`].
pub const BASSLINE_PARAMS: &[&str] = &["root", "scale_type", "pattern", "length"];

/// A trigger phrase and the action it selects.
#[derive(Debug, Clone, Copy)]
pub struct Trigger {
    pub phrase: &'static str,
    pub action: Action,
    /// Positional parameter names, filled left to right by numeric tokens.
    pub params: &'static [&'static str],
}

/// Checked in order; the first phrase contained in the text wins.
pub const TRIGGERS: &[Trigger] = &[
    Trigger {
        phrase: "tempo",
        action: Action::SetTempo,
        params: &["bpm"],
    },
    Trigger {
        phrase: "play",
        action: Action::StartPlayback,
        params: &[],
    },
    Trigger {
        phrase: "stop",
        action: Action::StopPlayback,
        params: &[],
    },
    Trigger {
        phrase: "trigger clip",
        action: Action::TriggerClip,
        params: &["track", "clip"],
    },
    Trigger {
        phrase: "volume",
        action: Action::SetTrackVolume,
        params: &["track", "volume"],
    },
    Trigger {
        phrase: "pan",
        action: Action::SetTrackPan,
        params: &["track", "pan"],
    },
    Trigger {
        phrase: "mute",
        action: Action::MuteTrack,
        params: &["track"],
    },
    Trigger {
        phrase: "solo",
        action: Action::SoloTrack,
        params: &["track"],
    },
];

/// First trigger whose phrase appears in already-lowercased `text`.
pub fn match_trigger(text: &str) -> Option<&'static Trigger> {
    TRIGGERS.iter().find(|t| text.contains(t.phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_phrase_wins() {
        // "tempo" is declared before "play"
        let t = match_trigger("play at tempo 120").unwrap();
        assert_eq!(t.action, Action::SetTempo);
    }

    #[test]
    fn no_match() {
        assert!(match_trigger("make it sound better").is_none());
    }

    #[test]
    fn every_mixer_action_has_one_trigger() {
        for action in Action::ALL {
            let count = TRIGGERS.iter().filter(|t| t.action == action).count();
            let expected = usize::from(action != Action::CreateBassline);
            assert_eq!(count, expected, "{action}");
        }
    }

    #[test]
    fn substring_matching_is_literal() {
        // "display" contains "play"
        assert_eq!(
            match_trigger("display the meters").map(|t| t.action),
            Some(Action::StartPlayback)
        );
    }
}

//! Deterministic command parser: keyword tables and a regex, no external services.

use lazy_static::lazy_static;
use regex::Regex;

use super::vocabulary::{self, BASSLINE_TRIGGER};
use super::{Action, Command, InterpretError, ParamValue};
use crate::theory::{BassPattern, BasslineSpec};

lazy_static! {
    /// "in g", "in c# minor", "in a major"
    static ref KEY_REGEX: Regex =
        Regex::new(r"(?i)in ([a-g]#?)\s*(major|minor)?").expect("valid key regex");
}

/// Parses a fixed vocabulary of musical and mixing commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternParser;

impl PatternParser {
    pub fn new() -> Self {
        Self
    }

    /// Interpret `text`, or fail with [`InterpretError::UnrecognizedCommand`].
    ///
    /// Bassline requests are checked before the trigger table, so "bassline"
    /// wins over any mixer keyword in the same sentence.
    pub fn parse(&self, text: &str) -> Result<Command, InterpretError> {
        let lower = text.to_lowercase();

        if lower.contains(BASSLINE_TRIGGER) {
            return Ok(parse_bassline(&lower));
        }

        let trigger =
            vocabulary::match_trigger(&lower).ok_or_else(|| InterpretError::UnrecognizedCommand {
                text: text.to_string(),
            })?;

        let mut command = Command::new(trigger.action);
        let mut slots = trigger.params.iter();
        for token in lower.split_whitespace() {
            let Ok(value) = token.parse::<f64>() else {
                continue;
            };
            match slots.next() {
                Some(name) => {
                    command.parameters.insert(name.to_string(), ParamValue::Number(value));
                }
                None => break,
            }
        }
        Ok(command)
    }
}

fn parse_bassline(lower: &str) -> Command {
    let defaults = BasslineSpec::default();
    let mut root = defaults.root.name().to_string();
    let mut scale_type = defaults.scale_type.name().to_string();

    if let Some(caps) = KEY_REGEX.captures(lower) {
        root = caps[1].to_uppercase();
        if let Some(mode) = caps.get(2) {
            scale_type = mode.as_str().to_lowercase();
        }
    }

    let pattern = BassPattern::ALL
        .into_iter()
        .find(|p| lower.contains(p.name()))
        .unwrap_or(defaults.pattern);

    Command::new(Action::CreateBassline)
        .with("root", root.as_str())
        .with("scale_type", scale_type.as_str())
        .with("pattern", pattern.name())
        .with("length", defaults.length as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Command, InterpretError> {
        PatternParser::new().parse(text)
    }

    fn text(cmd: &Command, name: &str) -> String {
        cmd.get(name).and_then(|v| v.as_text()).unwrap().to_string()
    }

    #[test]
    fn bassline_in_g_minor() {
        let cmd = parse("create a bassline in G minor").unwrap();
        assert_eq!(cmd.action, Action::CreateBassline);
        assert_eq!(text(&cmd, "root"), "G");
        assert_eq!(text(&cmd, "scale_type"), "minor");
        assert_eq!(text(&cmd, "pattern"), "walking");
        assert_eq!(cmd.get("length"), Some(&ParamValue::Integer(4)));
    }

    #[test]
    fn bassline_defaults() {
        let cmd = parse("give me a bassline").unwrap();
        assert_eq!(text(&cmd, "root"), "C");
        assert_eq!(text(&cmd, "scale_type"), "minor");
        assert_eq!(text(&cmd, "pattern"), "walking");
    }

    #[test]
    fn bassline_sharp_major() {
        let cmd = parse("Bassline in f# MAJOR please").unwrap();
        assert_eq!(text(&cmd, "root"), "F#");
        assert_eq!(text(&cmd, "scale_type"), "major");
    }

    #[test]
    fn bassline_root_without_mode_keeps_default_scale() {
        let cmd = parse("octave bassline in d").unwrap();
        assert_eq!(text(&cmd, "root"), "D");
        assert_eq!(text(&cmd, "scale_type"), "minor");
        assert_eq!(text(&cmd, "pattern"), "octave");
    }

    #[test]
    fn pattern_picked_by_table_order_not_position() {
        // "arpeggio" comes first in the text, "simple" first in the table
        let cmd = parse("arpeggio or simple bassline").unwrap();
        assert_eq!(text(&cmd, "pattern"), "simple");
    }

    #[test]
    fn bassline_beats_mixer_keywords() {
        let cmd = parse("bassline at volume 80").unwrap();
        assert_eq!(cmd.action, Action::CreateBassline);
    }

    #[test]
    fn volume_assigns_numbers_positionally() {
        let cmd = parse("set volume to 75 on track 2").unwrap();
        assert_eq!(cmd.action, Action::SetTrackVolume);
        assert_eq!(cmd.get("track"), Some(&ParamValue::Number(75.0)));
        assert_eq!(cmd.get("volume"), Some(&ParamValue::Number(2.0)));
    }

    #[test]
    fn tempo() {
        let cmd = parse("Set the tempo to 128").unwrap();
        assert_eq!(cmd.action, Action::SetTempo);
        assert_eq!(cmd.get("bpm"), Some(&ParamValue::Number(128.0)));
    }

    #[test]
    fn missing_parameters_are_absent() {
        let cmd = parse("mute the drums").unwrap();
        assert_eq!(cmd.action, Action::MuteTrack);
        assert!(cmd.parameters.is_empty());
    }

    #[test]
    fn extra_numbers_are_ignored() {
        let cmd = parse("trigger clip 1 2 3").unwrap();
        assert_eq!(cmd.action, Action::TriggerClip);
        assert_eq!(cmd.parameters.len(), 2);
        assert_eq!(cmd.get("track"), Some(&ParamValue::Number(1.0)));
        assert_eq!(cmd.get("clip"), Some(&ParamValue::Number(2.0)));
    }

    #[test]
    fn numbers_glued_to_words_are_skipped() {
        let cmd = parse("pan track 3 to -40 now, 50%").unwrap();
        assert_eq!(cmd.action, Action::SetTrackPan);
        assert_eq!(cmd.get("track"), Some(&ParamValue::Number(3.0)));
        assert_eq!(cmd.get("pan"), Some(&ParamValue::Number(-40.0)));
    }

    #[test]
    fn actions_without_parameters() {
        assert!(parse("play").unwrap().parameters.is_empty());
        assert_eq!(parse("stop everything").unwrap().action, Action::StopPlayback);
    }

    #[test]
    fn unrecognized() {
        assert_eq!(
            parse("make it groovier"),
            Err(InterpretError::UnrecognizedCommand {
                text: "make it groovier".to_string()
            })
        );
    }
}

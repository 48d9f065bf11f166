//! Outgoing Live messages and their OSC encoding (AbletonOSC address space).

use rosc::{OscMessage, OscType};

use crate::theory::Note;

/// One instruction for the Live set.
///
/// Track and clip indices are 0-based.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveMessage {
    /// Append a MIDI track at the end of the set.
    CreateMidiTrack,
    SetTrackName { track: u32, name: String },
    /// Create a clip `length` beats long.
    CreateClip { track: u32, clip: u32, length: f64 },
    ClearClip { track: u32, clip: u32 },
    AddNote {
        track: u32,
        clip: u32,
        pitch: Note,
        start: f64,
        duration: f64,
        velocity: u8,
    },
    TriggerClip { track: u32, clip: u32 },
    SetTempo(f64),
    StartPlayback,
    StopPlayback,
    /// Volume in 0.0–1.0.
    SetTrackVolume { track: u32, volume: f64 },
    /// Pan in -1.0–1.0.
    SetTrackPan { track: u32, pan: f64 },
    MuteTrack { track: u32 },
    SoloTrack { track: u32 },
}

impl LiveMessage {
    pub fn address(&self) -> &'static str {
        match self {
            LiveMessage::CreateMidiTrack => "/live/song/create_midi_track",
            LiveMessage::SetTrackName { .. } => "/live/track/set/name",
            LiveMessage::CreateClip { .. } => "/live/clip_slot/create_clip",
            LiveMessage::ClearClip { .. } => "/live/clip/remove/notes",
            LiveMessage::AddNote { .. } => "/live/clip/add/notes",
            LiveMessage::TriggerClip { .. } => "/live/clip/fire",
            LiveMessage::SetTempo(_) => "/live/song/set/tempo",
            LiveMessage::StartPlayback => "/live/song/start_playing",
            LiveMessage::StopPlayback => "/live/song/stop_playing",
            LiveMessage::SetTrackVolume { .. } => "/live/track/set/volume",
            LiveMessage::SetTrackPan { .. } => "/live/track/set/panning",
            LiveMessage::MuteTrack { .. } => "/live/track/set/mute",
            LiveMessage::SoloTrack { .. } => "/live/track/set/solo",
        }
    }

    pub fn args(&self) -> Vec<OscType> {
        match self {
            LiveMessage::CreateMidiTrack => vec![OscType::Int(-1)],
            LiveMessage::SetTrackName { track, name } => {
                vec![int(*track), OscType::String(name.clone())]
            }
            LiveMessage::CreateClip {
                track,
                clip,
                length,
            } => vec![int(*track), int(*clip), float(*length)],
            LiveMessage::ClearClip { track, clip } | LiveMessage::TriggerClip { track, clip } => {
                vec![int(*track), int(*clip)]
            }
            LiveMessage::AddNote {
                track,
                clip,
                pitch,
                start,
                duration,
                velocity,
            } => vec![
                int(*track),
                int(*clip),
                OscType::Int(*pitch as i32),
                float(*start),
                float(*duration),
                OscType::Int(*velocity as i32),
                OscType::Int(0),
            ],
            LiveMessage::SetTempo(bpm) => vec![float(*bpm)],
            LiveMessage::StartPlayback | LiveMessage::StopPlayback => Vec::new(),
            LiveMessage::SetTrackVolume { track, volume } => vec![int(*track), float(*volume)],
            LiveMessage::SetTrackPan { track, pan } => vec![int(*track), float(*pan)],
            LiveMessage::MuteTrack { track } | LiveMessage::SoloTrack { track } => {
                vec![int(*track), OscType::Int(1)]
            }
        }
    }

    pub fn to_osc(&self) -> OscMessage {
        OscMessage {
            addr: self.address().to_string(),
            args: self.args(),
        }
    }
}

fn int(index: u32) -> OscType {
    OscType::Int(index.min(i32::MAX as u32) as i32)
}

fn float(value: f64) -> OscType {
    OscType::Float(value as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_note_layout() {
        let msg = LiveMessage::AddNote {
            track: 0,
            clip: 1,
            pitch: 67,
            start: 0.5,
            duration: 0.25,
            velocity: 100,
        }
        .to_osc();
        assert_eq!(msg.addr, "/live/clip/add/notes");
        assert_eq!(
            msg.args,
            vec![
                OscType::Int(0),
                OscType::Int(1),
                OscType::Int(67),
                OscType::Float(0.5),
                OscType::Float(0.25),
                OscType::Int(100),
                OscType::Int(0),
            ]
        );
    }

    #[test]
    fn create_track_appends() {
        let msg = LiveMessage::CreateMidiTrack.to_osc();
        assert_eq!(msg.addr, "/live/song/create_midi_track");
        assert_eq!(msg.args, vec![OscType::Int(-1)]);
    }

    #[test]
    fn transport_has_no_args() {
        assert!(LiveMessage::StartPlayback.args().is_empty());
        assert_eq!(LiveMessage::StopPlayback.address(), "/live/song/stop_playing");
    }

    #[test]
    fn mute_and_solo_switch_on() {
        assert_eq!(
            LiveMessage::MuteTrack { track: 2 }.args(),
            vec![OscType::Int(2), OscType::Int(1)]
        );
        assert_eq!(
            LiveMessage::SoloTrack { track: 2 }.address(),
            "/live/track/set/solo"
        );
    }

    #[test]
    fn pan_uses_panning_address() {
        let msg = LiveMessage::SetTrackPan { track: 1, pan: -0.5 }.to_osc();
        assert_eq!(msg.addr, "/live/track/set/panning");
        assert_eq!(msg.args[1], OscType::Float(-0.5));
    }
}

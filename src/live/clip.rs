//! Writing a generated bassline into a Live clip.

use super::message::LiveMessage;
use super::sink::LiveSink;
use super::LiveError;
use crate::theory::{Bassline, Note};

/// A note with its absolute start time in the clip, in beats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedNote {
    pub pitch: Note,
    pub start: f64,
    pub duration: f64,
}

/// Lay events end to end starting at beat 0.
pub fn place_notes(bassline: &Bassline) -> Vec<PlacedNote> {
    let mut start = 0.0;
    bassline
        .events()
        .iter()
        .map(|e| {
            let placed = PlacedNote {
                pitch: e.pitch,
                start,
                duration: e.duration,
            };
            start += e.duration;
            placed
        })
        .collect()
}

/// Where a bassline goes and how it is voiced.
#[derive(Debug, Clone)]
pub struct ClipTarget {
    pub track: u32,
    pub clip: u32,
    pub velocity: u8,
    pub track_name: String,
}

/// Create a named MIDI track and a clip sized to the bassline, fill it, and fire it.
///
/// The slot is cleared after creation so notes left from an earlier clip in
/// the same slot don't mix with the new ones.
pub fn write_bassline<S: LiveSink + ?Sized>(
    sink: &mut S,
    target: &ClipTarget,
    bassline: &Bassline,
) -> Result<(), LiveError> {
    let ClipTarget {
        track,
        clip,
        velocity,
        ..
    } = *target;

    sink.send(&LiveMessage::CreateMidiTrack)?;
    sink.send(&LiveMessage::SetTrackName {
        track,
        name: target.track_name.clone(),
    })?;
    sink.send(&LiveMessage::CreateClip {
        track,
        clip,
        length: bassline.total_length(),
    })?;
    sink.send(&LiveMessage::ClearClip { track, clip })?;
    for note in place_notes(bassline) {
        sink.send(&LiveMessage::AddNote {
            track,
            clip,
            pitch: note.pitch,
            start: note.start,
            duration: note.duration,
            velocity,
        })?;
    }
    sink.send(&LiveMessage::TriggerClip { track, clip })?;

    log::info!(
        "wrote {} notes ({} beats) to track {track} clip {clip}",
        bassline.len(),
        bassline.total_length()
    );
    Ok(())
}

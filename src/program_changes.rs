use crate::{instruments::GM_INSTRUMENTS, program::ProgramNumber};
use log::debug;
use midly::{live::LiveEvent, MidiMessage, Smf, TrackEventKind};

/// A program-change message resolved against the GM bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramChange {
    /// Index of the track it came from. `None` for live input.
    pub track: Option<usize>,
    /// Absolute position in ticks. Always 0 for live input.
    pub tick: u64,
    pub channel: u8,
    pub program: ProgramNumber,
}

impl ProgramChange {
    pub fn from_live(event: &LiveEvent) -> Option<ProgramChange> {
        match event {
            LiveEvent::Midi {
                channel,
                message: MidiMessage::ProgramChange { program },
            } => Some(ProgramChange {
                track: None,
                tick: 0,
                channel: channel.as_int(),
                program: (*program).into(),
            }),
            _ => None,
        }
    }

    pub fn instrument(&self) -> &'static str {
        GM_INSTRUMENTS.program_name(self.program)
    }
}

/// Collects every program change in the file, ordered by absolute tick and
/// then by track.
pub fn program_changes(smf: &Smf) -> Vec<ProgramChange> {
    let mut changes = Vec::new();
    for (track_num, track) in smf.tracks.iter().enumerate() {
        let mut absolute_time = 0;
        for event in track {
            absolute_time += event.delta.as_int() as u64;
            if let TrackEventKind::Midi {
                channel,
                message: MidiMessage::ProgramChange { program },
            } = event.kind
            {
                let change = ProgramChange {
                    track: Some(track_num),
                    tick: absolute_time,
                    channel: channel.as_int(),
                    program: program.into(),
                };
                debug!(
                    "Program change at tick {} - track {} channel {}: {} ({})",
                    change.tick,
                    track_num,
                    change.channel,
                    change.program,
                    change.instrument()
                );
                changes.push(change);
            }
        }
    }

    // Stable, so changes on the same tick stay in track order.
    changes.sort_by_key(|change| change.tick);
    changes
}

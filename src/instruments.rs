use crate::{error::CatalogueError, program::ProgramNumber};
use std::{
    iter::{Enumerate, FusedIterator},
    slice,
};

pub const GM_INSTRUMENT_COUNT: usize = 128;

// https://en.wikipedia.org/wiki/General_MIDI#Program_change_events
// Names are kept exactly as consumers expect them, e.g. "Blown bottle" and "Lead 4 chiff".
const INSTRUMENTS: [&str; GM_INSTRUMENT_COUNT] = [
    // Piano
    "Acoustic Grand Piano",
    "Bright Acoustic Piano",
    "Electric Grand Piano",
    "Honky-tonk Piano",
    "Electric Piano 1",
    "Electric Piano 2",
    "Harpsichord",
    "Clavinet",

    // Chromatic Percussion
    "Celesta",
    "Glockenspiel",
    "Music Box",
    "Vibraphone",
    "Marimba",
    "Xylophone",
    "Tubular Bells",
    "Dulcimer",

    // Organ
    "Drawbar Organ",
    "Percussive Organ",
    "Rock Organ",
    "Church Organ",
    "Reed Organ",
    "Accordion",
    "Harmonica",
    "Tango Accordion",

    // Guitar
    "Acoustic Guitar (nylon)",
    "Acoustic Guitar (steel)",
    "Electric Guitar (jazz)",
    "Electric Guitar (clean)",
    "Electric Guitar (muted)",
    "Overdriven Guitar",
    "Distortion Guitar",
    "Guitar Harmonics",

    // Bass
    "Acoustic Bass",
    "Electric Bass (finger)",
    "Electric Bass (pick)",
    "Fretless Bass",
    "Slap Bass 1",
    "Slap Bass 2",
    "Synth Bass 1",
    "Synth Bass 2",

    // Strings
    "Violin",
    "Viola",
    "Cello",
    "Contrabass",
    "Tremolo Strings",
    "Pizzicato Strings",
    "Orchestral Harp",
    "Timpani",

    // Ensemble
    "String Ensemble 1",
    "String Ensemble 2",
    "Synth Strings 1",
    "Synth Strings 2",
    "Choir Aahs",
    "Voice Oohs",
    "Synth Choir",
    "Orchestra Hit",

    // Brass
    "Trumpet",
    "Trombone",
    "Tuba",
    "Muted Trumpet",
    "French Horn",
    "Brass Section",
    "Synth Brass 1",
    "Synth Brass 2",

    // Reed
    "Soprano Sax",
    "Alto Sax",
    "Tenor Sax",
    "Baritone Sax",
    "Oboe",
    "English Horn",
    "Bassoon",
    "Clarinet",

    // Pipe
    "Piccolo",
    "Flute",
    "Recorder",
    "Pan Flute",
    "Blown bottle",
    "Shakuhachi",
    "Whistle",
    "Ocarina",

    // Synth Lead
    "Lead 1 (square)",
    "Lead 2 (sawtooth)",
    "Lead 3 (calliope)",
    "Lead 4 chiff",
    "Lead 5 (charang)",
    "Lead 6 (voice)",
    "Lead 7 (fifths)",
    "Lead 8 (bass + lead)",

    // Synth Pad
    "Pad 1 (new age)",
    "Pad 2 (warm)",
    "Pad 3 (polysynth)",
    "Pad 4 (choir)",
    "Pad 5 (bowed)",
    "Pad 6 (metallic)",
    "Pad 7 (halo)",
    "Pad 8 (sweep)",

    // Synth Effects
    "FX 1 (rain)",
    "FX 2 (soundtrack)",
    "FX 3 (crystal)",
    "FX 4 (atmosphere)",
    "FX 5 (brightness)",
    "FX 6 (goblins)",
    "FX 7 (echoes)",
    "FX 8 (sci-fi)",

    // Ethnic
    "Sitar",
    "Banjo",
    "Shamisen",
    "Koto",
    "Kalimba",
    "Bagpipe",
    "Fiddle",
    "Shanai",

    // Percussive
    "Tinkle Bell",
    "Agogo",
    "Steel Drums",
    "Woodblock",
    "Taiko Drum",
    "Melodic Tom",
    "Synth Drum",
    "Reverse Cymbal",

    // Sound Effects
    "Guitar Fret Noise",
    "Breath Noise",
    "Seashore",
    "Bird Tweet",
    "Telephone Ring",
    "Helicopter",
    "Applause",
    "Gunshot",
];

/// The General MIDI bank, indexed by program number.
///
/// The table is compiled in and never changes, so the catalogue can be shared
/// freely between threads. Use [`GM_INSTRUMENTS`] rather than building one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstrumentCatalogue {
    names: &'static [&'static str; GM_INSTRUMENT_COUNT],
}

pub static GM_INSTRUMENTS: InstrumentCatalogue = InstrumentCatalogue::general_midi();

impl InstrumentCatalogue {
    pub const fn general_midi() -> Self {
        Self {
            names: &INSTRUMENTS,
        }
    }

    /// Name of the instrument at `program`. Numbers outside 0..=127 are an
    /// error, never clamped or wrapped.
    pub fn name_of(&self, program: i64) -> Result<&'static str, CatalogueError> {
        ProgramNumber::try_from(program).map(|program| self.program_name(program))
    }

    /// Like [`Self::name_of`], for text that still has to be read as an integer.
    pub fn name_of_str(&self, text: &str) -> Result<&'static str, CatalogueError> {
        text.parse::<ProgramNumber>()
            .map(|program| self.program_name(program))
    }

    /// Like [`Self::name_of`], for numbers that arrive as floats. Fractional
    /// values are rejected.
    pub fn name_of_f64(&self, value: f64) -> Result<&'static str, CatalogueError> {
        ProgramNumber::try_from(value).map(|program| self.program_name(program))
    }

    pub fn program_name(&self, program: ProgramNumber) -> &'static str {
        self.names[program.value() as usize]
    }

    /// First program number carrying exactly this name.
    pub fn program_of(&self, name: &str) -> Option<ProgramNumber> {
        self.entries()
            .find(|(_, candidate)| *candidate == name)
            .map(|(program, _)| program)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Every (program number, name) pair in ascending program order.
    pub fn entries(&self) -> Entries {
        Entries {
            inner: self.names.iter().enumerate(),
        }
    }
}

impl Default for InstrumentCatalogue {
    fn default() -> Self {
        Self::general_midi()
    }
}

impl IntoIterator for &InstrumentCatalogue {
    type Item = (ProgramNumber, &'static str);
    type IntoIter = Entries;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[derive(Clone, Debug)]
pub struct Entries {
    inner: Enumerate<slice::Iter<'static, &'static str>>,
}

impl Iterator for Entries {
    type Item = (ProgramNumber, &'static str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, name)| (ProgramNumber(index as u8), *name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(index, name)| (ProgramNumber(index as u8), *name))
    }
}

impl ExactSizeIterator for Entries {}

impl FusedIterator for Entries {}

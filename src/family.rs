// https://en.wikipedia.org/wiki/General_MIDI#Program_change_events
use crate::program::ProgramNumber;
use std::{fmt, ops::RangeInclusive};

/// The sixteen groups of eight programs that make up the GM bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InstrumentFamily {
    Piano,
    ChromaticPercussion,
    Organ,
    Guitar,
    Bass,
    Strings,
    Ensemble,
    Brass,
    Reed,
    Pipe,
    SynthLead,
    SynthPad,
    SynthEffects,
    Ethnic,
    Percussive,
    SoundEffects,
}

impl InstrumentFamily {
    pub const ALL: [InstrumentFamily; 16] = [
        InstrumentFamily::Piano,
        InstrumentFamily::ChromaticPercussion,
        InstrumentFamily::Organ,
        InstrumentFamily::Guitar,
        InstrumentFamily::Bass,
        InstrumentFamily::Strings,
        InstrumentFamily::Ensemble,
        InstrumentFamily::Brass,
        InstrumentFamily::Reed,
        InstrumentFamily::Pipe,
        InstrumentFamily::SynthLead,
        InstrumentFamily::SynthPad,
        InstrumentFamily::SynthEffects,
        InstrumentFamily::Ethnic,
        InstrumentFamily::Percussive,
        InstrumentFamily::SoundEffects,
    ];

    const SIZE: u8 = 8;

    pub fn of(program: ProgramNumber) -> InstrumentFamily {
        Self::ALL[(program.value() / Self::SIZE) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            InstrumentFamily::Piano => "Piano",
            InstrumentFamily::ChromaticPercussion => "Chromatic Percussion",
            InstrumentFamily::Organ => "Organ",
            InstrumentFamily::Guitar => "Guitar",
            InstrumentFamily::Bass => "Bass",
            InstrumentFamily::Strings => "Strings",
            InstrumentFamily::Ensemble => "Ensemble",
            InstrumentFamily::Brass => "Brass",
            InstrumentFamily::Reed => "Reed",
            InstrumentFamily::Pipe => "Pipe",
            InstrumentFamily::SynthLead => "Synth Lead",
            InstrumentFamily::SynthPad => "Synth Pad",
            InstrumentFamily::SynthEffects => "Synth Effects",
            InstrumentFamily::Ethnic => "Ethnic",
            InstrumentFamily::Percussive => "Percussive",
            InstrumentFamily::SoundEffects => "Sound Effects",
        }
    }

    /// The program numbers belonging to this family.
    pub fn programs(&self) -> RangeInclusive<u8> {
        let first = *self as u8 * Self::SIZE;
        first..=first + Self::SIZE - 1
    }
}

impl fmt::Display for InstrumentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(value: u8) -> ProgramNumber {
        ProgramNumber::new(value).unwrap()
    }

    #[test]
    fn families_cover_the_bank_in_order() {
        let mut next = 0u8;
        for family in InstrumentFamily::ALL {
            let programs = family.programs();
            assert_eq!(*programs.start(), next);
            assert_eq!(programs.clone().count(), 8);
            for value in programs {
                assert_eq!(InstrumentFamily::of(program(value)), family);
            }
            next += 8;
        }
        assert_eq!(next, 128);
    }

    #[test]
    fn boundaries() {
        assert_eq!(program(0).family(), InstrumentFamily::Piano);
        assert_eq!(program(7).family(), InstrumentFamily::Piano);
        assert_eq!(program(8).family(), InstrumentFamily::ChromaticPercussion);
        assert_eq!(program(40).family(), InstrumentFamily::Strings);
        assert_eq!(program(127).family(), InstrumentFamily::SoundEffects);
        assert_eq!(InstrumentFamily::SynthLead.to_string(), "Synth Lead");
    }
}

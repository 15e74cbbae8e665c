use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input};
use gm_instruments::{
    program_changes, CatalogueError, InstrumentFamily, ProgramChange, ProgramNumber,
    GM_INSTRUMENTS,
};
use log::{info, warn};
use midly::Smf;
use simple_logger::SimpleLogger;
use std::{
    fs,
    io::{Error, ErrorKind},
    path::PathBuf,
};
use tabled::{Table, Tabled};

const MIDI_DIR: &str = "./midi";

const ACTIONS: [&str; 4] = [
    "List all instruments",
    "Pick an instrument",
    "Look up a program number",
    "Show program changes in a MIDI file",
];

#[derive(Tabled)]
struct InstrumentRow {
    #[tabled(rename = "Program")]
    program: u8,
    #[tabled(rename = "Family")]
    family: InstrumentFamily,
    #[tabled(rename = "Instrument")]
    name: &'static str,
}

#[derive(Tabled)]
struct ProgramChangeRow {
    #[tabled(rename = "Tick")]
    tick: u64,
    #[tabled(rename = "Track")]
    track: usize,
    #[tabled(rename = "Channel")]
    channel: u8,
    #[tabled(rename = "Program")]
    program: u8,
    #[tabled(rename = "Instrument")]
    instrument: &'static str,
}

impl From<&ProgramChange> for ProgramChangeRow {
    fn from(change: &ProgramChange) -> Self {
        ProgramChangeRow {
            tick: change.tick,
            track: change.track.unwrap_or_default(),
            // Channels are shown 1-16 the way hardware labels them
            channel: change.channel + 1,
            program: change.program.value(),
            instrument: change.instrument(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .without_timestamps()
        .env()
        .init()?;
    let theme = ColorfulTheme::default();

    let action = FuzzySelect::with_theme(&theme)
        .with_prompt("What do you want to do?")
        .items(&ACTIONS)
        .default(0)
        .interact()?;

    match action {
        0 => list_instruments(),
        1 => pick_instrument(&theme)?,
        2 => look_up_program(&theme)?,
        _ => show_program_changes(&theme)?,
    }

    Ok(())
}

fn list_instruments() {
    let rows = GM_INSTRUMENTS.entries().map(|(program, name)| InstrumentRow {
        program: program.value(),
        family: program.family(),
        name,
    });
    println!("{}", Table::new(rows));
}

fn pick_instrument(theme: &ColorfulTheme) -> Result<(), Box<dyn std::error::Error>> {
    let labels = GM_INSTRUMENTS
        .entries()
        .map(|(program, name)| format!("{:>3} {}", program.value(), name))
        .collect::<Vec<_>>();

    let selection = FuzzySelect::with_theme(theme)
        .with_prompt("Select an instrument")
        .items(&labels)
        .default(0)
        .interact()?;

    // The picker lists entries() in order, so the row index is the program number
    let program = ProgramNumber::try_from(selection as i64)?;
    info!(
        "Program {}: {} ({})",
        program,
        GM_INSTRUMENTS.program_name(program),
        program.family()
    );
    Ok(())
}

fn look_up_program(theme: &ColorfulTheme) -> Result<(), Box<dyn std::error::Error>> {
    let text: String = Input::with_theme(theme)
        .with_prompt("Program number (0-127)")
        .interact_text()?;

    println!("{}", display_name(&text));
    Ok(())
}

/// Label to show for a program number typed by the user. Lookup failures
/// degrade to a generic label instead of guessing an instrument.
fn display_name(text: &str) -> String {
    match GM_INSTRUMENTS.name_of_str(text) {
        Ok(name) => name.to_string(),
        Err(CatalogueError::OutOfRange { value }) => {
            warn!("Program number {} is outside the GM bank", value);
            format!("Program {}", value)
        }
        Err(e) => {
            warn!("{}", e);
            "Unknown Instrument".to_string()
        }
    }
}

fn show_program_changes(theme: &ColorfulTheme) -> Result<(), Box<dyn std::error::Error>> {
    let midi_file_path = get_midi_selection(theme)?;
    let midi_data = fs::read(&midi_file_path)?;
    let smf = Smf::parse(&midi_data)?;

    let changes = program_changes(&smf);
    info!(
        "{} program changes across {} tracks in {}",
        changes.len(),
        smf.tracks.len(),
        midi_file_path.display()
    );
    if changes.is_empty() {
        return Ok(());
    }

    let rows = changes.iter().map(ProgramChangeRow::from);
    println!("{}", Table::new(rows));
    Ok(())
}

fn get_midi_selection(theme: &ColorfulTheme) -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Get a list of the .mid files from ./midi
    let midi_files: Vec<_> = fs::read_dir(MIDI_DIR)
        .map_err(|e| {
            Error::new(
                e.kind(),
                format!("You need to place MIDI files in {}", MIDI_DIR),
            )
        })?
        .filter_map(|entry| {
            entry.ok().and_then(|e| {
                let path = e.path();
                if path.extension().and_then(|s| s.to_str()) == Some("mid") {
                    Some(path)
                } else {
                    None
                }
            })
        })
        .collect();

    if midi_files.is_empty() {
        return Err(Error::new(
            ErrorKind::NotFound,
            format!("No .mid files in {}", MIDI_DIR),
        )
        .into());
    }

    let midi_file_names = midi_files
        .iter()
        .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
        .collect::<Vec<_>>();

    let selection = FuzzySelect::with_theme(theme)
        .with_prompt("Select a midi file")
        .items(&midi_file_names)
        .default(0)
        .interact()?;

    Ok(midi_files[selection].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_degrades_gracefully() {
        assert_eq!(display_name("40"), "Violin");
        assert_eq!(display_name("128"), "Program 128");
        assert_eq!(display_name("-1"), "Program -1");
        assert_eq!(display_name("flute"), "Unknown Instrument");
    }

    #[test]
    fn program_change_rows_use_one_based_channels() {
        let change = ProgramChange {
            track: Some(2),
            tick: 960,
            channel: 9,
            program: "118".parse().unwrap(),
        };
        let row = ProgramChangeRow::from(&change);
        assert_eq!(row.channel, 10);
        assert_eq!(row.track, 2);
        assert_eq!(row.instrument, "Synth Drum");
    }
}

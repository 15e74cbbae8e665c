//! General MIDI instrument names.
//!
//! [`GM_INSTRUMENTS`] maps a program number (0-127) to the standard GM
//! instrument name, and lists the whole bank in program order:
//!
//! ```
//! use gm_instruments::GM_INSTRUMENTS;
//!
//! assert_eq!(GM_INSTRUMENTS.name_of(40), Ok("Violin"));
//! assert!(GM_INSTRUMENTS.name_of(128).is_err());
//! assert_eq!(GM_INSTRUMENTS.entries().count(), 128);
//! ```

mod error;
mod family;
mod instruments;
mod program;
mod program_changes;

pub use error::CatalogueError;
pub use family::InstrumentFamily;
pub use instruments::{Entries, InstrumentCatalogue, GM_INSTRUMENTS, GM_INSTRUMENT_COUNT};
pub use program::ProgramNumber;
pub use program_changes::{program_changes, ProgramChange};

use crate::{error::CatalogueError, family::InstrumentFamily};
use midly::num::u7;
use std::{fmt, num::IntErrorKind, str::FromStr};

/// A General MIDI program number, always within 0..=127.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgramNumber(pub(crate) u8);

impl ProgramNumber {
    pub const MIN: ProgramNumber = ProgramNumber(0);
    pub const MAX: ProgramNumber = ProgramNumber(127);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    pub fn family(&self) -> InstrumentFamily {
        InstrumentFamily::of(*self)
    }
}

impl fmt::Display for ProgramNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u7> for ProgramNumber {
    fn from(value: u7) -> Self {
        Self(value.as_int())
    }
}

impl From<ProgramNumber> for u7 {
    fn from(value: ProgramNumber) -> Self {
        u7::from(value.0)
    }
}

impl From<ProgramNumber> for u8 {
    fn from(value: ProgramNumber) -> Self {
        value.0
    }
}

impl TryFrom<i64> for ProgramNumber {
    type Error = CatalogueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(CatalogueError::OutOfRange { value })
    }
}

impl TryFrom<f64> for ProgramNumber {
    type Error = CatalogueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(CatalogueError::InvalidArgument {
                input: value.to_string(),
            });
        }
        // Saturates for huge magnitudes, which still lands out of range.
        Self::try_from(value as i64)
    }
}

impl FromStr for ProgramNumber {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(value) => Self::try_from(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Err(CatalogueError::OutOfRange { value: i64::MAX }),
                IntErrorKind::NegOverflow => Err(CatalogueError::OutOfRange { value: i64::MIN }),
                _ => Err(CatalogueError::InvalidArgument {
                    input: s.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_full_range() {
        for value in 0..=127i64 {
            let program = ProgramNumber::try_from(value).unwrap();
            assert_eq!(program.value() as i64, value);
        }
        assert_eq!(ProgramNumber::new(127), Some(ProgramNumber::MAX));
        assert_eq!(ProgramNumber::new(128), None);
    }

    #[test]
    fn rejects_integers_outside_the_range() {
        assert_eq!(
            ProgramNumber::try_from(128i64),
            Err(CatalogueError::OutOfRange { value: 128 })
        );
        assert_eq!(
            ProgramNumber::try_from(-1i64),
            Err(CatalogueError::OutOfRange { value: -1 })
        );
        assert_eq!(
            ProgramNumber::try_from(i64::MIN),
            Err(CatalogueError::OutOfRange { value: i64::MIN })
        );
    }

    #[test]
    fn parses_text() {
        assert_eq!("40".parse::<ProgramNumber>().unwrap().value(), 40);
        assert_eq!(" 7 \n".parse::<ProgramNumber>().unwrap().value(), 7);
        assert_eq!(
            "-1".parse::<ProgramNumber>(),
            Err(CatalogueError::OutOfRange { value: -1 })
        );
        assert_eq!(
            "99999999999999999999".parse::<ProgramNumber>(),
            Err(CatalogueError::OutOfRange { value: i64::MAX })
        );
        for bad in ["", "3.5", "piano", "0x10", "12a"] {
            assert!(
                matches!(
                    bad.parse::<ProgramNumber>(),
                    Err(CatalogueError::InvalidArgument { .. })
                ),
                "{bad:?} should be an invalid argument"
            );
        }
    }

    #[test]
    fn floats_must_be_integral() {
        assert_eq!(ProgramNumber::try_from(12.0f64).unwrap().value(), 12);
        assert!(matches!(
            ProgramNumber::try_from(12.5f64),
            Err(CatalogueError::InvalidArgument { .. })
        ));
        assert!(matches!(
            ProgramNumber::try_from(f64::NAN),
            Err(CatalogueError::InvalidArgument { .. })
        ));
        assert!(matches!(
            ProgramNumber::try_from(f64::INFINITY),
            Err(CatalogueError::InvalidArgument { .. })
        ));
        assert_eq!(
            ProgramNumber::try_from(128.0f64),
            Err(CatalogueError::OutOfRange { value: 128 })
        );
    }

    #[test]
    fn display_honours_padding() {
        assert_eq!(format!("{:>3}", ProgramNumber::new(7).unwrap()), "  7");
        assert_eq!(ProgramNumber::MAX.to_string(), "127");
    }

    #[test]
    fn converts_to_and_from_u7() {
        let program = ProgramNumber::from(u7::from(99));
        assert_eq!(program.value(), 99);
        assert_eq!(u7::from(program).as_int(), 99);
    }
}

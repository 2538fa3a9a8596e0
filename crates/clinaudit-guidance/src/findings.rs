//! The messages the guidance rules emit.
//!
//! Each finding is a typed value whose `Display` text is the message shown to
//! audit leads. They serialize as that text.

use std::fmt;

use serde::{Serialize, Serializer};

/// A design problem that lowers a question's analysability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    FreeText,
    FreeTextUnjustified,
    TooFewOptions,
    TooManyOptions,
    NumericUnbounded,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Warning::FreeText => "Free text is difficult to analyze quantitatively",
            Warning::FreeTextUnjustified => "Free text requires justification",
            Warning::TooFewOptions => "Categorical questions need at least 2 options",
            Warning::TooManyOptions => "Too many options may confuse respondents",
            Warning::NumericUnbounded => "Numeric questions should have min/max validation",
        };
        f.write_str(message)
    }
}

/// A recommended change to a question's structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    PreferStructured,
    GroupOptions,
    CheckRangeOverlap,
    SetClinicalRange,
    UseInstrument {
        name: &'static str,
        description: &'static str,
    },
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::PreferStructured => {
                f.write_str("Consider using categorical options or validated scales instead")
            }
            Suggestion::GroupOptions => {
                f.write_str("Consider grouping options or using hierarchical questions")
            }
            Suggestion::CheckRangeOverlap => f.write_str("Ensure numeric ranges don't overlap"),
            Suggestion::SetClinicalRange => {
                f.write_str("Set plausible clinical ranges to catch data entry errors")
            }
            Suggestion::UseInstrument { name, description } => write!(
                f,
                "Consider using the validated {name} instrument for {description}"
            ),
        }
    }
}

/// A wording or documentation improvement for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Improvement {
    TextTooShort,
    TextTooLong,
    AmbiguousFrequency,
    DoubleBarreled,
    MissingHelpText,
    MissingClinicalGuidance,
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Improvement::TextTooShort => {
                "Question text is very short - consider adding more context"
            }
            Improvement::TextTooLong => {
                "Question text is very long - consider breaking into multiple questions"
            }
            Improvement::AmbiguousFrequency => {
                "Avoid ambiguous frequency words - use specific timeframes instead"
            }
            Improvement::DoubleBarreled => {
                "This may be a double-barreled question - consider splitting into separate questions"
            }
            Improvement::MissingHelpText => "Add help text to guide data entry",
            Improvement::MissingClinicalGuidance => {
                "Add clinical guidance to explain the question's purpose"
            }
        };
        f.write_str(message)
    }
}

macro_rules! serialize_as_message {
    ($($ty:ty),+) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )+
    };
}

serialize_as_message!(Warning, Suggestion, Improvement);

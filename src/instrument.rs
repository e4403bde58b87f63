// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Who auditions, and for which ensemble.

use std::fmt;
use std::str::FromStr;

use snafu::Snafu;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Instrument {
    Flute,
    Oboe,
    Clarinet,
    Bassoon,
    Horn,
    Trumpet,
    Trombone,
    Tuba,
    Percussion,
    Harp,
    Violin,
    Viola,
    Cello,
    Bass,
}

impl Instrument {
    pub const ALL: [Instrument; 14] = [
        Instrument::Flute,
        Instrument::Oboe,
        Instrument::Clarinet,
        Instrument::Bassoon,
        Instrument::Horn,
        Instrument::Trumpet,
        Instrument::Trombone,
        Instrument::Tuba,
        Instrument::Percussion,
        Instrument::Harp,
        Instrument::Violin,
        Instrument::Viola,
        Instrument::Cello,
        Instrument::Bass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Instrument::Flute => "Flute",
            Instrument::Oboe => "Oboe",
            Instrument::Clarinet => "Clarinet",
            Instrument::Bassoon => "Bassoon",
            Instrument::Horn => "Horn",
            Instrument::Trumpet => "Trumpet",
            Instrument::Trombone => "Trombone",
            Instrument::Tuba => "Tuba",
            Instrument::Percussion => "Percussion",
            Instrument::Harp => "Harp",
            Instrument::Violin => "Violin",
            Instrument::Viola => "Viola",
            Instrument::Cello => "Cello",
            Instrument::Bass => "Bass",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name given on the command line is not known.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ParseNameError {
    #[snafu(display("Unknown instrument {:?}", name))]
    UnknownInstrument { name: String },
    #[snafu(display(
        "Unknown orchestra {:?} (expected one of cs, phil, concert or a full name)",
        name
    ))]
    UnknownOrchestra { name: String },
}

impl FromStr for Instrument {
    type Err = ParseNameError;

    /// Parse an instrument from its display name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use audition_sheets::instrument::Instrument;
    ///
    /// assert_eq!("cello".parse(), Ok(Instrument::Cello));
    /// assert!("kazoo".parse::<Instrument>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Instrument::ALL
            .iter()
            .copied()
            .find(|instrument| instrument.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseNameError::UnknownInstrument { name: s.to_string() })
    }
}

/// The clef an instrument reads in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Clef {
    Treble,
    Alto,
    Bass,
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clef::Treble => write!(f, "treble clef"),
            Clef::Alto => write!(f, "alto clef"),
            Clef::Bass => write!(f, "bass clef"),
        }
    }
}

/// The ensembles auditions are held for, from beginner to advanced.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orchestra {
    ChamberStrings,
    Philharmonic,
    Concert,
}

impl Orchestra {
    pub const ALL: [Orchestra; 3] = [
        Orchestra::ChamberStrings,
        Orchestra::Philharmonic,
        Orchestra::Concert,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Orchestra::ChamberStrings => "Chamber Strings",
            Orchestra::Philharmonic => "Philharmonic Orchestra",
            Orchestra::Concert => "Concert Orchestra",
        }
    }

    /// Short identifier accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Orchestra::ChamberStrings => "cs",
            Orchestra::Philharmonic => "phil",
            Orchestra::Concert => "concert",
        }
    }

    /// The paragraph introducing the ensemble at the top of each packet.
    pub fn description(self) -> &'static str {
        match self {
            Orchestra::ChamberStrings => {
                "SEMYO’s beginning string ensemble is open to string players with a minimum of \
                 one or two years of playing experience. Orchestra members will be introduced to \
                 basic ensemble playing and will learn teamwork while playing a well-rounded \
                 selection of repertoire."
            }
            Orchestra::Philharmonic => {
                "Philharmonic Orchestra is a full orchestra experience for students of all ages \
                 on string, woodwind, brass, and percussion instruments. String players typically \
                 need a minimum of 3-4 years of experience, and wind players typically need \
                 between 1 to 2 years of experience. Literature includes arranged and original \
                 works."
            }
            Orchestra::Concert => {
                "Concert Orchestra is a full orchestra experience for advanced students on \
                 string, woodwind, brass, and percussion instruments. Literature includes \
                 original masterworks for full symphony orchestra. Students will play music in \
                 all keys and utilize advanced bowing and string techniques."
            }
        }
    }
}

impl fmt::Display for Orchestra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orchestra {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Orchestra::ALL
            .iter()
            .copied()
            .find(|orchestra| {
                orchestra.id().eq_ignore_ascii_case(wanted)
                    || orchestra.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseNameError::UnknownOrchestra { name: s.to_string() })
    }
}

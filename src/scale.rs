// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! A scale as it is requested at an audition.

use std::fmt;

use crate::instrument::Instrument;
use crate::theory::ScaleKind;

/// Pitch the `\relative` block of a scale starts from unless overridden.
pub const DEFAULT_STARTING_PITCH: &str = "c'";

/// Instrument and scale combinations that start somewhere else than
/// [`DEFAULT_STARTING_PITCH`].
pub const STARTING_PITCH_OVERRIDES: &[((Instrument, ScaleKind), &str)] = &[
    ((Instrument::Flute, ScaleKind::AMajor), "c''"),
    ((Instrument::Flute, ScaleKind::AMelodicMinor), "c''"),
    ((Instrument::Flute, ScaleKind::AFlatMajor), "c''"),
    ((Instrument::Flute, ScaleKind::BFlatMajor), "c''"),
    ((Instrument::Flute, ScaleKind::GMajor), "c''"),
    ((Instrument::Flute, ScaleKind::GMelodicMinor), "c''"),
];

/// A scale to be played over a number of octaves at some tempo.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scale {
    kind: ScaleKind,
    /// How often the one-octave pattern is repeated.
    octaves: u32,
    /// Suggested tempo in beats per minute.
    tempo: u32,
}

impl Scale {
    pub fn new(kind: ScaleKind, octaves: u32, tempo: u32) -> Self {
        Self {
            kind,
            octaves,
            tempo,
        }
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn tempo(&self) -> u32 {
        self.tempo
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn key_signature(&self) -> &'static str {
        self.kind.key_signature()
    }

    /// "1 Octave", "2 Octaves", ... Only a count of exactly one is singular.
    pub fn octave_description(&self) -> String {
        if self.octaves == 1 {
            format!("{} Octave", self.octaves)
        } else {
            format!("{} Octaves", self.octaves)
        }
    }

    /// The pitch the scale is written relative to on the given instrument.
    pub fn starting_pitch(&self, instrument: Instrument) -> &'static str {
        STARTING_PITCH_OVERRIDES
            .iter()
            .find(|(key, _)| *key == (instrument, self.kind))
            .map_or(DEFAULT_STARTING_PITCH, |&(_, pitch)| pitch)
    }

    /// All notes of the scale as played on `instrument`.
    pub fn notes(&self, instrument: Instrument) -> String {
        self.kind.note_sequence(instrument, self.octaves)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.octave_description())
    }
}

/// Request several scale kinds with the same range and tempo.
pub fn scales(kinds: &[ScaleKind], octaves: u32, tempo: u32) -> Vec<Scale> {
    kinds
        .iter()
        .map(|kind| Scale::new(*kind, octaves, tempo))
        .collect()
}

// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The keys and modes that scales can be written in.

use crate::instrument::Instrument;

/// A musical key together with its mode, e.g. "C-sharp Harmonic Minor".
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScaleKind {
    CMajor,
    CMelodicMinor,
    CSharpHarmonicMinor,
    DMajor,
    DMelodicMinor,
    EMajor,
    EMelodicMinor,
    EFlatMajor,
    FMajor,
    FMelodicMinor,
    FSharpMelodicMinor,
    GMajor,
    GMelodicMinor,
    AMajor,
    AMelodicMinor,
    AFlatMajor,
    BFlatMajor,
    BMelodicMinor,
}

/// Everything there is to know about a scale kind.
#[derive(Debug, PartialEq, Eq)]
pub struct ScaleInfo {
    /// One octave of the scale in LilyPond pitch names, without the closing tonic.
    pub pattern: &'static str,
    /// Human readable name.
    pub name: &'static str,
    /// Argument to LilyPond's `\key` command.
    pub key: &'static str,
}

const fn info(pattern: &'static str, name: &'static str, key: &'static str) -> ScaleInfo {
    ScaleInfo { pattern, name, key }
}

const C_MAJOR: ScaleInfo = info("c d e f g a b", "C Major", r"c \major");
const C_MELODIC_MINOR: ScaleInfo = info("c d ees f g a b", "C Melodic Minor", r"c \minor");
const C_SHARP_HARMONIC_MINOR: ScaleInfo = info(
    "cis dis e fis gis a bis",
    "C-sharp Harmonic Minor",
    r"cis \minor",
);
const D_MAJOR: ScaleInfo = info("d e fis g a b cis", "D Major", r"d \major");
const D_MELODIC_MINOR: ScaleInfo = info("d e f g a b cis", "D Melodic Minor", r"d \minor");
const E_MAJOR: ScaleInfo = info("e fis gis a b cis dis", "E Major", r"e \major");
const E_MELODIC_MINOR: ScaleInfo = info("e fis g a b cis dis", "E Melodic Minor", r"e \minor");
const E_FLAT_MAJOR: ScaleInfo = info("ees f g aes bes c d", "E-flat Major", r"ees \major");
const F_MAJOR: ScaleInfo = info("f g a bes c d e", "F Major", r"f \major");
const F_MELODIC_MINOR: ScaleInfo = info("f g aes bes c d e", "F Melodic Minor", r"f \minor");
const F_SHARP_MELODIC_MINOR: ScaleInfo = info(
    "fis gis a b cis dis e",
    "F-sharp Melodic Minor",
    r"fis \minor",
);
const G_MAJOR: ScaleInfo = info("g a b c d e fis", "G Major", r"g \major");
const G_MELODIC_MINOR: ScaleInfo = info("g a bes c d e fis", "G Melodic Minor", r"g \minor");
const A_MAJOR: ScaleInfo = info("a b cis d e fis gis", "A Major", r"a \major");
const A_MELODIC_MINOR: ScaleInfo = info("a b c d e fis gis", "A Melodic Minor", r"a \minor");
const A_FLAT_MAJOR: ScaleInfo = info("aes bes c des ees f g", "A-flat Major", r"aes \major");
const B_FLAT_MAJOR: ScaleInfo = info("bes c d ees f g a", "B-flat Major", r"bes \major");
const B_MELODIC_MINOR: ScaleInfo = info("b cis d e fis gis ais", "B Melodic Minor", r"b \minor");

impl ScaleKind {
    /// All scale kinds in declaration order.
    pub const ALL: [ScaleKind; 18] = [
        ScaleKind::CMajor,
        ScaleKind::CMelodicMinor,
        ScaleKind::CSharpHarmonicMinor,
        ScaleKind::DMajor,
        ScaleKind::DMelodicMinor,
        ScaleKind::EMajor,
        ScaleKind::EMelodicMinor,
        ScaleKind::EFlatMajor,
        ScaleKind::FMajor,
        ScaleKind::FMelodicMinor,
        ScaleKind::FSharpMelodicMinor,
        ScaleKind::GMajor,
        ScaleKind::GMelodicMinor,
        ScaleKind::AMajor,
        ScaleKind::AMelodicMinor,
        ScaleKind::AFlatMajor,
        ScaleKind::BFlatMajor,
        ScaleKind::BMelodicMinor,
    ];

    pub fn info(self) -> &'static ScaleInfo {
        match self {
            ScaleKind::CMajor => &C_MAJOR,
            ScaleKind::CMelodicMinor => &C_MELODIC_MINOR,
            ScaleKind::CSharpHarmonicMinor => &C_SHARP_HARMONIC_MINOR,
            ScaleKind::DMajor => &D_MAJOR,
            ScaleKind::DMelodicMinor => &D_MELODIC_MINOR,
            ScaleKind::EMajor => &E_MAJOR,
            ScaleKind::EMelodicMinor => &E_MELODIC_MINOR,
            ScaleKind::EFlatMajor => &E_FLAT_MAJOR,
            ScaleKind::FMajor => &F_MAJOR,
            ScaleKind::FMelodicMinor => &F_MELODIC_MINOR,
            ScaleKind::FSharpMelodicMinor => &F_SHARP_MELODIC_MINOR,
            ScaleKind::GMajor => &G_MAJOR,
            ScaleKind::GMelodicMinor => &G_MELODIC_MINOR,
            ScaleKind::AMajor => &A_MAJOR,
            ScaleKind::AMelodicMinor => &A_MELODIC_MINOR,
            ScaleKind::AFlatMajor => &A_FLAT_MAJOR,
            ScaleKind::BFlatMajor => &B_FLAT_MAJOR,
            ScaleKind::BMelodicMinor => &B_MELODIC_MINOR,
        }
    }

    /// One octave of pitches, separated by single spaces.
    ///
    /// This string doubles as the sort key of scales on a page.
    pub fn pattern(self) -> &'static str {
        self.info().pattern
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The key signature, e.g. `ees \major`.
    pub fn key_signature(self) -> &'static str {
        self.info().key
    }

    /// The first pitch of the pattern.
    pub fn tonic(self) -> &'static str {
        self.pattern().split(' ').next().unwrap_or("")
    }

    /// Write out the scale over `octaves` octaves, closing on the tonic.
    ///
    /// # Examples
    ///
    /// ```
    /// use audition_sheets::instrument::Instrument;
    /// use audition_sheets::theory::ScaleKind;
    ///
    /// assert_eq!(
    ///     ScaleKind::FMajor.note_sequence(Instrument::Horn, 1),
    ///     "f g a bes c d e f"
    /// );
    /// ```
    ///
    /// Zero octaves degenerate to a lone closing tonic preceded by a space.
    #[allow(clippy::match_single_binding)]
    pub fn note_sequence(self, instrument: Instrument, octaves: u32) -> String {
        // Clef or range exceptions for specific instruments belong here.
        match (instrument, octaves) {
            _ => {
                let repeated = vec![self.pattern(); octaves as usize].join(" ");
                format!("{} {}", repeated, self.tonic())
            }
        }
    }
}

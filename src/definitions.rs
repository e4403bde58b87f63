// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The audition packets of the current season.

use crate::instrument::{Clef, Instrument, Orchestra};
use crate::page::Page;
use crate::scale::{scales, Scale};
use crate::theory::ScaleKind::{self, *};

/// Every major and minor key with up to four sharps or flats.
pub const FOUR_SHARPS_AND_FLATS: [ScaleKind; 18] = [
    CMajor,
    GMajor,
    DMajor,
    EMajor,
    AMajor,
    FMajor,
    BFlatMajor,
    EFlatMajor,
    AFlatMajor,
    AMelodicMinor,
    EMelodicMinor,
    BMelodicMinor,
    CSharpHarmonicMinor,
    FSharpMelodicMinor,
    DMelodicMinor,
    GMelodicMinor,
    CMelodicMinor,
    FMelodicMinor,
];

const PHILHARMONIC_OCTAVES: u32 = 2;
const PHILHARMONIC_TEMPO: u32 = 116;
const CHAMBER_STRINGS_TEMPO: u32 = 80;

/// Instruments auditioning for the philharmonic orchestra, with their clefs.
const PHILHARMONIC_SECTIONS: [(Instrument, Clef); 13] = [
    (Instrument::Flute, Clef::Treble),
    (Instrument::Clarinet, Clef::Treble),
    (Instrument::Oboe, Clef::Treble),
    (Instrument::Bassoon, Clef::Treble),
    (Instrument::Horn, Clef::Treble),
    (Instrument::Trumpet, Clef::Treble),
    (Instrument::Trombone, Clef::Treble),
    (Instrument::Tuba, Clef::Treble),
    (Instrument::Percussion, Clef::Treble),
    (Instrument::Violin, Clef::Treble),
    (Instrument::Viola, Clef::Alto),
    (Instrument::Cello, Clef::Bass),
    (Instrument::Bass, Clef::Bass),
];

pub fn philharmonic_scales() -> Vec<Scale> {
    scales(&FOUR_SHARPS_AND_FLATS, PHILHARMONIC_OCTAVES, PHILHARMONIC_TEMPO)
}

pub fn philharmonic_pages() -> Vec<Page> {
    PHILHARMONIC_SECTIONS
        .iter()
        .map(|&(instrument, clef)| {
            Page::new(instrument, clef, Orchestra::Philharmonic, philharmonic_scales())
        })
        .collect()
}

/// Violin packet for the beginning string ensemble.
pub fn chamber_strings_violin() -> Page {
    let mut requested = scales(&[GMajor, AMajor, BFlatMajor], 2, CHAMBER_STRINGS_TEMPO);
    requested.extend(scales(&[FMajor, DMelodicMinor, CMajor], 1, CHAMBER_STRINGS_TEMPO));
    requested.extend(scales(&[CMajor, DMajor, GMelodicMinor], 2, CHAMBER_STRINGS_TEMPO));
    Page::new(Instrument::Violin, Clef::Treble, Orchestra::ChamberStrings, requested)
}

/// Every packet defined above.
pub fn all_pages() -> Vec<Page> {
    let mut pages = philharmonic_pages();
    pages.push(chamber_strings_violin());
    pages
}

/// The packets printed by default.
pub fn audition_materials() -> Vec<Page> {
    all_pages()
        .into_iter()
        .filter(|page| {
            page.instrument() == Instrument::Flute && page.orchestra() == Orchestra::Philharmonic
        })
        .collect()
}

/// Narrows down a selection of pages. Empty lists do not restrict anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFilter {
    pub instruments: Vec<Instrument>,
    pub orchestras: Vec<Orchestra>,
}

impl PageFilter {
    pub fn matches(&self, page: &Page) -> bool {
        (self.instruments.is_empty() || self.instruments.contains(&page.instrument()))
            && (self.orchestras.is_empty() || self.orchestras.contains(&page.orchestra()))
    }

    /// Keep the matching pages without reordering them.
    pub fn apply(&self, pages: Vec<Page>) -> Vec<Page> {
        pages.into_iter().filter(|page| self.matches(page)).collect()
    }
}

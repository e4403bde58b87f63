// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! One instrument's audition packet for one orchestra.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::instrument::{Clef, Instrument, Orchestra};
use crate::scale::Scale;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    instrument: Instrument,
    clef: Clef,
    orchestra: Orchestra,
    /// Scales as requested, possibly with the same kind several times.
    scales: Vec<Scale>,
}

impl Page {
    pub fn new(
        instrument: Instrument,
        clef: Clef,
        orchestra: Orchestra,
        scales: Vec<Scale>,
    ) -> Self {
        Self {
            instrument,
            clef,
            orchestra,
            scales,
        }
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn clef(&self) -> Clef {
        self.clef
    }

    pub fn orchestra(&self) -> Orchestra {
        self.orchestra
    }

    /// "Instrument / Orchestra"
    pub fn title(&self) -> String {
        format!("{} / {}", self.instrument.name(), self.orchestra.name())
    }

    pub fn set_scales(&mut self, scales: Vec<Scale>) {
        self.scales = scales;
    }

    /// The scales to print, at most one per kind.
    ///
    /// Scales are ordered by the pitch pattern of their kind, and within a
    /// kind by descending octave count. Of several scales of the same kind
    /// only the first in that order, i.e. the one spanning the most octaves,
    /// is kept.
    pub fn scales(&self) -> Vec<Scale> {
        let mut sorted = self.scales.clone();
        sorted.sort_by(compare_scales);

        let mut seen = HashSet::new();
        sorted.retain(|scale| seen.insert(scale.kind()));
        sorted
    }
}

fn compare_scales(a: &Scale, b: &Scale) -> Ordering {
    a.kind()
        .pattern()
        .cmp(b.kind().pattern())
        .then_with(|| b.octaves().cmp(&a.octaves()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::theory::ScaleKind;

    fn violin(scales: Vec<Scale>) -> Page {
        Page::new(Instrument::Violin, Clef::Treble, Orchestra::ChamberStrings, scales)
    }

    #[test]
    fn highest_octave_wins() {
        let page = violin(vec![
            Scale::new(ScaleKind::CMajor, 1, 80),
            Scale::new(ScaleKind::CMajor, 2, 80),
        ]);
        assert_eq!(page.scales(), vec![Scale::new(ScaleKind::CMajor, 2, 80)]);
    }

    #[test]
    fn sorted_by_pattern() {
        let page = violin(vec![
            Scale::new(ScaleKind::DMelodicMinor, 1, 80),
            Scale::new(ScaleKind::CMajor, 1, 80),
        ]);
        let kinds: Vec<_> = page.scales().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![ScaleKind::CMajor, ScaleKind::DMelodicMinor]);
    }

    #[test]
    fn pattern_order_is_not_name_order() {
        // "d e f g a b cis" sorts before "d e fis g a b cis",
        // although "D Major" sorts before "D Melodic Minor".
        let page = violin(vec![
            Scale::new(ScaleKind::AFlatMajor, 1, 80),
            Scale::new(ScaleKind::DMajor, 1, 80),
            Scale::new(ScaleKind::AMajor, 1, 80),
            Scale::new(ScaleKind::DMelodicMinor, 1, 80),
            Scale::new(ScaleKind::CSharpHarmonicMinor, 1, 80),
            Scale::new(ScaleKind::CMajor, 1, 80),
        ]);
        let kinds: Vec<_> = page.scales().iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ScaleKind::AMajor,
                ScaleKind::AFlatMajor,
                ScaleKind::CMajor,
                ScaleKind::CSharpHarmonicMinor,
                ScaleKind::DMelodicMinor,
                ScaleKind::DMajor,
            ]
        );
    }

    #[test]
    fn idempotent() {
        let page = violin(vec![
            Scale::new(ScaleKind::GMajor, 2, 80),
            Scale::new(ScaleKind::FMajor, 1, 80),
            Scale::new(ScaleKind::GMajor, 1, 80),
        ]);
        let first = page.scales();
        let second = page.scales();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn empty() {
        assert!(violin(Vec::new()).scales().is_empty());
    }

    #[test]
    fn set_scales_replaces_list() {
        let mut page = violin(vec![Scale::new(ScaleKind::GMajor, 2, 80)]);
        page.set_scales(vec![Scale::new(ScaleKind::EMajor, 3, 100)]);
        assert_eq!(page.scales(), vec![Scale::new(ScaleKind::EMajor, 3, 100)]);
    }

    #[test]
    fn title() {
        let page = violin(Vec::new());
        assert_eq!(page.title(), "Violin / Chamber Strings");
    }
}

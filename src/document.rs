// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Assembling pages into a complete LilyPond document.
//!
//! Every page becomes a `\bookpart` so that each packet starts on a fresh
//! sheet. The document is built in memory; writing it anywhere is left to
//! the caller.

#[cfg(test)]
mod expect_tests;

use log::{debug, trace};

use crate::instrument::Instrument;
use crate::markup::{bold, Header, List, Paragraph, Spacer, Title, ToLilypond};
use crate::page::Page;
use crate::scale::Scale;

/// Paper setup shared by all pages.
pub const PRELUDE: &str = r##"\paper {
  top-margin = 1\in
  left-margin = 1\in
  right-margin = 1\in
  bottom-margin = 1\in
  indent = 0\in
  print-page-number = ##f
  #(define fonts
    (set-global-fonts
     #:roman "Helvetica"
    ))
  tagline = ""
}
"##;

/// Scales are unmetered, so neither time signature nor bar lines are engraved.
pub const SCORE_LAYOUT: &str = r#"\layout {
    \context { \Staff \remove Time_signature_engraver }
    \context { \Staff \remove "Bar_engraver" }
}"#;

const SIGHTREADING: &str = "You will be asked to sightread several excerpts. It will begin with \
    easier excerpts and become more difficult. Those who wish to audition for concert orchestra \
    should be familiar with famous orchestral excerpts for their instrument.";

const SOLO_INSTRUCTIONS: [&str; 4] = [
    "Prepare one solo that best demonstrates your abilities.",
    "Choose your selection with guidance from your private teacher or orchestra/band director.",
    "Solos need not be memorized.",
    "You will be asked to stop before you reach the end of the piece.",
];

const SCALE_INSTRUCTIONS: [&str; 3] = [
    "Memorization of the scales is not required.",
    "At the audition students will choose the first scale and conductors will choose a second scale.",
    "See below for specific suggested (listed rhythms and tempos are general guidelines – please \
     play scales in the range and tempo with which you are most comfortable).",
];

const SCALES_LEAD_IN: &str = "Here are the scales you should prepare:";

/// Accumulates LilyPond code, one line per snippet.
struct Code {
    text: String,
}

impl Code {
    fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    fn line<S: AsRef<str>>(&mut self, line: S) {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    fn fragment(&mut self, fragment: &dyn ToLilypond) {
        self.line(fragment.to_lilypond());
    }
}

/// Generate the complete document for the given pages, in order.
pub fn generate(pages: &[Page]) -> String {
    let mut document = String::from(PRELUDE);
    for page in pages {
        document.push_str(&bookpart(page));
    }
    document
}

/// The section of the document holding a single page.
pub fn bookpart(page: &Page) -> String {
    let scales = page.scales();
    debug!(
        "{} ({}): {} scales",
        page.title(),
        page.clef(),
        scales.len()
    );

    let mut code = Code::new();
    code.line(r"\bookpart {");
    code.fragment(&Title(page.title()));
    code.fragment(&Paragraph(page.orchestra().description().to_string()));
    code.fragment(&Header("1. Sightreading".to_string()));
    code.fragment(&Paragraph(SIGHTREADING.to_string()));
    code.fragment(&Header("2. Solo".to_string()));
    code.fragment(&List::new(&SOLO_INSTRUCTIONS));
    code.fragment(&Header("3. Scales".to_string()));
    code.fragment(&List::new(&SCALE_INSTRUCTIONS));
    code.fragment(&Spacer);
    code.fragment(&Paragraph(bold(SCALES_LEAD_IN)));
    for scale in &scales {
        code.fragment(&Spacer);
        code.text.push_str(&score(scale, page.instrument()));
    }
    code.line("}");
    code.text
}

/// The `\score` block of a single scale.
pub fn score(scale: &Scale, instrument: Instrument) -> String {
    let start = scale.starting_pitch(instrument);
    trace!(
        "{} at {} bpm, starting from {}",
        scale,
        scale.tempo(),
        start
    );

    let mut code = Code::new();
    code.line(r"    \score {");
    code.line(format!(
        r#"    \header {{ piece = "{}, {}" }}"#,
        scale.name(),
        scale.octave_description()
    ));
    code.line(format!(r"        \relative {} {{", start));
    code.line(format!(r"        \key {}", scale.key_signature()));
    code.line(format!("            {}", scale.notes(instrument)));
    code.line("        }");
    code.line(SCORE_LAYOUT);
    code.line("    }");
    code.text
}

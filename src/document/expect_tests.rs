use super::{bookpart, score};
use crate::instrument::{Clef, Instrument, Orchestra};
use crate::page::Page;
use crate::scale::Scale;
use crate::theory::ScaleKind;
use expect_test::{expect, Expect};

fn check_score(scale: Scale, instrument: Instrument, output: Expect) {
    output.assert_eq(&score(&scale, instrument));
}

fn check_page(page: Page, output: Expect) {
    output.assert_eq(&bookpart(&page));
}

#[test]
fn score_c_major_one_octave() {
    check_score(
        Scale::new(ScaleKind::CMajor, 1, 80),
        Instrument::Violin,
        expect![[r#"
                \score {
                \header { piece = "C Major, 1 Octave" }
                    \relative c' {
                    \key c \major
                        c d e f g a b c
                    }
            \layout {
                \context { \Staff \remove Time_signature_engraver }
                \context { \Staff \remove "Bar_engraver" }
            }
                }
        "#]],
    );
}

#[test]
fn score_flute_b_flat_two_octaves() {
    check_score(
        Scale::new(ScaleKind::BFlatMajor, 2, 116),
        Instrument::Flute,
        expect![[r#"
                \score {
                \header { piece = "B-flat Major, 2 Octaves" }
                    \relative c'' {
                    \key bes \major
                        bes c d ees f g a bes c d ees f g a bes
                    }
            \layout {
                \context { \Staff \remove Time_signature_engraver }
                \context { \Staff \remove "Bar_engraver" }
            }
                }
        "#]],
    );
}

#[test]
fn flute_philharmonic_page() {
    check_page(
        Page::new(
            Instrument::Flute,
            Clef::Treble,
            Orchestra::Philharmonic,
            vec![Scale::new(ScaleKind::CMajor, 1, 80)],
        ),
        expect![[r#"
            \bookpart {
            \header { subtitle = "Flute / Philharmonic Orchestra"} \markup { \vspace #1 }
            \markup { \wordwrap { Philharmonic Orchestra is a full orchestra experience for students of all ages on string, woodwind, brass, and percussion instruments. String players typically need a minimum of 3-4 years of experience, and wind players typically need between 1 to 2 years of experience. Literature includes arranged and original works. } }
            \markup { \vspace #1 } \markup { \fontsize #3 { "1. Sightreading"} } \markup { \vspace #1 }
            \markup { \wordwrap { You will be asked to sightread several excerpts. It will begin with easier excerpts and become more difficult. Those who wish to audition for concert orchestra should be familiar with famous orchestral excerpts for their instrument. } }
            \markup { \vspace #1 } \markup { \fontsize #3 { "2. Solo"} } \markup { \vspace #1 }
            \markup { • \hspace #1 \wordwrap { Prepare one solo that best demonstrates your abilities.} \vspace #1 }
            \markup { • \hspace #1 \wordwrap { Choose your selection with guidance from your private teacher or orchestra/band director.} \vspace #1 }
            \markup { • \hspace #1 \wordwrap { Solos need not be memorized.} \vspace #1 }
            \markup { • \hspace #1 \wordwrap { You will be asked to stop before you reach the end of the piece.} \vspace #1 }
            \markup { \vspace #1 } \markup { \fontsize #3 { "3. Scales"} } \markup { \vspace #1 }
            \markup { • \hspace #1 \wordwrap { Memorization of the scales is not required.} \vspace #1 }
            \markup { • \hspace #1 \wordwrap { At the audition students will choose the first scale and conductors will choose a second scale.} \vspace #1 }
            \markup { • \hspace #1 \wordwrap { See below for specific suggested (listed rhythms and tempos are general guidelines – please play scales in the range and tempo with which you are most comfortable).} \vspace #1 }
            \markup { \vspace #1 }
            \markup { \wordwrap { \bold { Here are the scales you should prepare:} } }
            \markup { \vspace #1 }
                \score {
                \header { piece = "C Major, 1 Octave" }
                    \relative c' {
                    \key c \major
                        c d e f g a b c
                    }
            \layout {
                \context { \Staff \remove Time_signature_engraver }
                \context { \Staff \remove "Bar_engraver" }
            }
                }
            }
        "#]],
    );
}

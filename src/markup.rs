// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Text blocks placed between the scores of a packet.
//!
//! Text is inserted verbatim, nothing is escaped.

/// Anything that can be written as a LilyPond snippet.
pub trait ToLilypond {
    fn to_lilypond(&self) -> String;
}

/// Wrap text in a `\bold` markup command.
pub fn bold(text: &str) -> String {
    format!(r"\bold {{ {}}}", text)
}

/// The subtitle of a book part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(pub String);

impl ToLilypond for Title {
    fn to_lilypond(&self) -> String {
        format!(r#"\header {{ subtitle = "{}"}} \markup {{ \vspace #1 }}"#, self.0)
    }
}

/// A section heading, padded above and below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header(pub String);

impl ToLilypond for Header {
    fn to_lilypond(&self) -> String {
        format!(
            r#"\markup {{ \vspace #1 }} \markup {{ \fontsize #3 {{ "{}"}} }} \markup {{ \vspace #1 }}"#,
            self.0
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph(pub String);

impl ToLilypond for Paragraph {
    fn to_lilypond(&self) -> String {
        format!(r"\markup {{ \wordwrap {{ {} }} }}", self.0)
    }
}

/// A bulleted list, one markup block per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List(pub Vec<String>);

impl List {
    pub fn new<S: AsRef<str>>(items: &[S]) -> Self {
        List(items.iter().map(|item| item.as_ref().to_string()).collect())
    }
}

impl ToLilypond for List {
    fn to_lilypond(&self) -> String {
        self.0
            .iter()
            .map(|item| format!(r"\markup {{ • \hspace #1 \wordwrap {{ {}}} \vspace #1 }}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Vertical space of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer;

impl ToLilypond for Spacer {
    fn to_lilypond(&self) -> String {
        r"\markup { \vspace #1 }".to_string()
    }
}

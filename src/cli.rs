// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Command line front end printing the packets as LilyPond code.

use std::io::{self, Write};
use std::path::PathBuf;

use log::{debug, info, warn};
use snafu::{ResultExt, Snafu};
use structopt::StructOpt;

use crate::definitions::{self, PageFilter};
use crate::document;
use crate::instrument::{Instrument, Orchestra};
use crate::output::{self, OutputError};
use crate::page::Page;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "audition-sheets",
    about = "Generating audition packets for LilyPond"
)]
pub struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Output file for the LilyPond code. Printed to stdout if not given.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Include every defined packet, not just the default one.
    #[structopt(long)]
    all: bool,

    /// Only include packets for this instrument (may be repeated).
    #[structopt(short = "i", long = "instrument", number_of_values = 1)]
    instruments: Vec<Instrument>,

    /// Only include packets for this orchestra: cs, phil, concert (may be repeated).
    #[structopt(long = "orchestra", number_of_values = 1)]
    orchestras: Vec<Orchestra>,

    /// List the selected packets instead of generating the document.
    #[structopt(long)]
    list: bool,
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not initialize logging: {}", source))]
    InitLogger { source: log::SetLoggerError },
    #[snafu(display("{}", source))]
    Output { source: OutputError },
    #[snafu(display("Could not list packets: {}", source))]
    List { source: io::Error },
}

impl Opt {
    fn log_level(&self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }

    fn filter(&self) -> PageFilter {
        PageFilter {
            instruments: self.instruments.clone(),
            orchestras: self.orchestras.clone(),
        }
    }

    /// The pages requested by these options, in document order.
    pub fn pages(&self) -> Vec<Page> {
        let candidates = if self.all {
            definitions::all_pages()
        } else {
            definitions::audition_materials()
        };
        self.filter().apply(candidates)
    }
}

pub fn main() -> Result<(), Error> {
    run(Opt::from_args())
}

pub fn run(opt: Opt) -> Result<(), Error> {
    simple_logger::init_with_level(opt.log_level()).context(InitLogger)?;

    let pages = opt.pages();
    if pages.is_empty() {
        warn!("no packets selected, the document will only contain the paper setup");
    }

    if opt.list {
        return list(&pages).context(List);
    }

    info!("generating {} packet(s)", pages.len());
    let code = document::generate(&pages);
    debug!("generated {} lines of LilyPond code", code.lines().count());
    output::write_document(&code, opt.output.as_deref()).context(Output)
}

fn list(pages: &[Page]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for page in pages {
        writeln!(out, "{} ({} scales)", page.title(), page.scales().len())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn opt(args: &[&str]) -> Opt {
        let mut argv = vec!["audition-sheets"];
        argv.extend_from_slice(args);
        Opt::from_iter_safe(argv).unwrap()
    }

    fn titles(opt: &Opt) -> Vec<String> {
        opt.pages().iter().map(|p| p.title()).collect()
    }

    #[test]
    fn defaults() {
        let opt = opt(&[]);
        assert_eq!(opt.log_level(), log::Level::Info);
        assert_eq!(opt.output, None);
        assert_eq!(titles(&opt), vec!["Flute / Philharmonic Orchestra"]);
    }

    #[test]
    fn verbosity() {
        assert_eq!(opt(&["-v"]).log_level(), log::Level::Debug);
        assert_eq!(opt(&["-vv"]).log_level(), log::Level::Trace);
        assert_eq!(opt(&["-v", "-v", "-v", "-v"]).log_level(), log::Level::Trace);
    }

    #[test]
    fn all_with_filters() {
        let opt = opt(&["--all", "-i", "viola", "-i", "Cello"]);
        assert_eq!(
            titles(&opt),
            vec![
                "Viola / Philharmonic Orchestra",
                "Cello / Philharmonic Orchestra"
            ]
        );

        let opt = self::opt(&["--all", "--orchestra", "cs"]);
        assert_eq!(titles(&opt), vec!["Violin / Chamber Strings"]);
    }

    #[test]
    fn filter_without_all_narrows_default() {
        assert!(titles(&opt(&["-i", "oboe"])).is_empty());
    }

    #[test]
    fn empty_selection_prints_only_the_prelude() {
        let pages = opt(&["-i", "oboe"]).pages();
        let mut buffer = Vec::new();
        output::write_to(&mut buffer, &document::generate(&pages)).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            format!("{}\n", document::PRELUDE)
        );
    }

    #[test]
    fn output_path() {
        let opt = opt(&["-o", "packets.ly"]);
        assert_eq!(opt.output, Some(PathBuf::from("packets.ly")));
    }

    #[test]
    fn unknown_instrument_is_rejected() {
        let err = Opt::from_iter_safe(&["audition-sheets", "-i", "kazoo"]).unwrap_err();
        assert!(err.message.contains("Unknown instrument \"kazoo\""));
    }
}

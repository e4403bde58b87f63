// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing generated documents.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
pub enum OutputError {
    #[snafu(display("Could not write {}: {}", path.display(), source))]
    WriteFile { path: PathBuf, source: io::Error },
    #[snafu(display("Could not write to standard output: {}", source))]
    WriteStdout { source: io::Error },
}

/// Write the document to `outfile`, or to standard output if not given.
///
/// The document is terminated by one extra newline in both cases.
pub fn write_document(document: &str, outfile: Option<&Path>) -> Result<(), OutputError> {
    match outfile {
        Some(path) => {
            info!("writing {} bytes to {}", document.len(), path.display());
            let mut file = std::fs::File::create(path).context(WriteFile { path })?;
            write_to(&mut file, document).context(WriteFile { path })
        }
        None => {
            info!("writing {} bytes to standard output", document.len());
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_to(&mut lock, document).context(WriteStdout)
        }
    }
}

pub(crate) fn write_to<W: Write>(out: &mut W, document: &str) -> io::Result<()> {
    writeln!(out, "{}", document)?;
    out.flush()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trailing_newline() {
        let mut buffer = Vec::new();
        write_to(&mut buffer, "\\paper {}\n").unwrap();
        assert_eq!(buffer, b"\\paper {}\n\n");
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "audition-sheets-output-test-{}.ly",
            std::process::id()
        ));
        write_document("\\bookpart {\n}\n", Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, "\\bookpart {\n}\n\n");
    }

    #[test]
    fn missing_directory() {
        let path = std::env::temp_dir()
            .join("audition-sheets-no-such-directory")
            .join("out.ly");
        let err = write_document("", Some(&path)).unwrap_err();
        match err {
            OutputError::WriteFile { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error {}", other),
        }
    }
}

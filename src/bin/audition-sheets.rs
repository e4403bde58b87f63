// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `audition-sheets` prints the audition packets as LilyPond code,
//! ready to be engraved with `lilypond -`.

use audition_sheets::cli;

fn main() -> Result<(), cli::Error> {
    cli::main()
}

// audition-sheets -- audition packets typeset with LilyPond
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

pub mod cli;
pub mod definitions;
pub mod document;
pub mod instrument;
pub mod markup;
pub mod output;
pub mod page;
pub mod scale;
pub mod theory;

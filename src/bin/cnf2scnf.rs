/**************************************************************************/
/*  This file is part of CNFSEXP.                                         */
/*                                                                        */
/*  Copyright (C) 2025                                                    */
/*    CEA (Commissariat à l'énergie atomique et aux énergies              */
/*         alternatives)                                                  */
/*                                                                        */
/*  you can redistribute it and/or modify it under the terms of the GNU   */
/*  Lesser General Public License as published by the Free Software       */
/*  Foundation, version 2.1.                                              */
/*                                                                        */
/*  It is distributed in the hope that it will be useful,                 */
/*  but WITHOUT ANY WARRANTY; without even the implied warranty of        */
/*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the         */
/*  GNU Lesser General Public License for more details.                   */
/*                                                                        */
/*  See the GNU Lesser General Public License version 2.1                 */
/*  for more details (enclosed in the file licenses/LGPLv2.1).            */
/*                                                                        */
/**************************************************************************/

use cnfsexp::translate::{translate_dir, translate_file};
use cnfsexp::{BatchPolicy, Variant};
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cnf2scnf",
    about = "Translates DIMACS CNF files with `c varname` comments to named s-expressions in <basename>.scnf"
)]
struct Opt {
    /// Input file. Without it, every *.cnf file of the current directory is translated.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// In batch mode, translate the remaining files when one fails
    #[structopt(short, long)]
    keep_going: bool,

    /// Enable debug output
    #[structopt(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    cnfsexp::setup_tracing(opts.debug)?;
    match &opts.input {
        Some(input) => {
            translate_file(input, Variant::Named)?;
        }
        None => {
            let policy = if opts.keep_going {
                BatchPolicy::KeepGoing
            } else {
                BatchPolicy::FailFast
            };
            translate_dir(Path::new("."), Variant::Named, policy)?;
        }
    }
    Ok(())
}

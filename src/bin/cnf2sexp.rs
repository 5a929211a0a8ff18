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

use cnfsexp::translate::translate_file;
use cnfsexp::Variant;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cnf2sexp",
    about = "Translates a DIMACS CNF file to an s-expression in <basename>_t.cnf"
)]
struct Opt {
    /// Input file
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Enable debug output
    #[structopt(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    cnfsexp::setup_tracing(opts.debug)?;
    translate_file(&opts.input, Variant::Plain)?;
    Ok(())
}

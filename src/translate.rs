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

//! Translation of files on disk: output naming, single file and batch mode

use crate::dimacs;
use crate::sexp;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Which translation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// raw literals, written to `<basename>_t.cnf`
    Plain,
    /// literals replaced by `c varname` names, written to `<basename>.scnf`
    Named,
}

impl Variant {
    /// What is appended to the basename of the input to name the output
    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Plain => "_t.cnf",
            Variant::Named => ".scnf",
        }
    }

    /// Parses and renders the content of a CNF file.
    pub fn translate_str(self, input: &str) -> anyhow::Result<String> {
        Ok(match self {
            Variant::Plain => sexp::render_plain(&dimacs::parse_plain(input)?),
            Variant::Named => sexp::render_named(&dimacs::parse_named(input)?)?,
        })
    }
}

/// Suffix of the files picked by batch mode
pub const CNF_SUFFIX: &str = ".cnf";

/// The file name of `input` up to its first `.`, followed by the suffix of `variant`, in the
/// directory of `input`.
///
/// `dir/php3.cnf` becomes `dir/php3_t.cnf` for `Variant::Plain`.
pub fn output_path(input: &Path, variant: Variant) -> anyhow::Result<PathBuf> {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no utf-8 file name", input.display()))?;
    let base = name.split('.').next().unwrap_or(name);
    Ok(input.with_file_name(format!("{}{}", base, variant.suffix())))
}

/// Translates `input` and writes the result next to it. Returns the path of the output.
///
/// Nothing is written when parsing or rendering fails.
pub fn translate_file(input: &Path, variant: Variant) -> anyhow::Result<PathBuf> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading input {}", input.display()))?;
    let out = output_path(input, variant)?;
    let rendered = variant
        .translate_str(&text)
        .with_context(|| format!("translating {}", input.display()))?;
    std::fs::write(&out, rendered)
        .with_context(|| format!("writing output {}", out.display()))?;
    debug!("translated {} to {}", input.display(), out.display());
    Ok(out)
}

/// What batch mode does when a file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// stop at the first failing file
    FailFast,
    /// translate every file, then report all failures
    KeepGoing,
}

/// Regular files of `dir` whose name ends with `.cnf`, in the order of the directory listing.
pub fn cnf_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut res = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let is_file = entry
            .file_type()
            .with_context(|| format!("stat {}", entry.path().display()))?
            .is_file();
        let matches = entry
            .file_name()
            .to_str()
            .map_or(false, |n| n.ends_with(CNF_SUFFIX));
        if is_file && matches {
            res.push(entry.path());
        } else {
            trace!("skipping {}", entry.path().display());
        }
    }
    Ok(res)
}

/// Translates every `.cnf` file of `dir`, printing `Processing: <file>` before each one.
/// Returns the outputs that were written.
pub fn translate_dir(
    dir: &Path,
    variant: Variant,
    policy: BatchPolicy,
) -> anyhow::Result<Vec<PathBuf>> {
    let files = cnf_files(dir)?;
    info!("{} cnf files in {}", files.len(), dir.display());
    let mut written = Vec::new();
    let mut failed = Vec::new();
    for file in files {
        println!(
            "Processing: {}",
            file.strip_prefix(dir).unwrap_or(&file).display()
        );
        match translate_file(&file, variant) {
            Ok(out) => written.push(out),
            Err(e) => match policy {
                BatchPolicy::FailFast => return Err(e),
                BatchPolicy::KeepGoing => {
                    warn!("{:#}", e);
                    failed.push(file);
                }
            },
        }
    }
    if !failed.is_empty() {
        let names: Vec<String> = failed.iter().map(|f| f.display().to_string()).collect();
        anyhow::bail!(
            "{} of {} files failed: {}",
            failed.len(),
            failed.len() + written.len(),
            names.join(", ")
        );
    }
    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::TranslateError;

    #[test]
    fn output_names() -> anyhow::Result<()> {
        assert_eq!(
            output_path(Path::new("php3.cnf"), Variant::Plain)?,
            PathBuf::from("php3_t.cnf")
        );
        assert_eq!(
            output_path(Path::new("dir.d/php3.v2.cnf"), Variant::Named)?,
            PathBuf::from("dir.d/php3.scnf")
        );
        assert_eq!(
            output_path(Path::new("noext"), Variant::Named)?,
            PathBuf::from("noext.scnf")
        );
        Ok(())
    }

    #[test]
    fn single_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("small.cnf");
        std::fs::write(&input, "p cnf 2 1\n1 -2 0\n")?;
        let out = translate_file(&input, Variant::Plain)?;
        assert_eq!(out, dir.path().join("small_t.cnf"));
        assert_eq!(std::fs::read_to_string(&out)?, "((p cnf 2 1) (1 -2))");
        Ok(())
    }

    #[test]
    fn overwrites_output() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("a.cnf");
        std::fs::write(&input, "p cnf 1 1\nc varname 1 x_{5}\n-1 0\n")?;
        std::fs::write(dir.path().join("a.scnf"), "stale content that is longer")?;
        let out = translate_file(&input, Variant::Named)?;
        assert_eq!(
            std::fs::read_to_string(&out)?,
            "((p cnf 1 1)\n ((not (var 5))))"
        );
        Ok(())
    }

    #[test]
    fn no_output_on_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("bad.cnf");
        std::fs::write(&input, "p wat 1 1\n")?;
        let err = translate_file(&input, Variant::Plain).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TranslateError>(),
            Some(TranslateError::MalformedHeader { .. })
        ));
        assert!(!dir.path().join("bad_t.cnf").exists());

        let input = dir.path().join("unknown.cnf");
        std::fs::write(&input, "p cnf 1 1\n1 0\n")?;
        let err = translate_file(&input, Variant::Named).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TranslateError>(),
            Some(TranslateError::UnknownVariable { clause: 1, literal: 1 })
        ));
        assert!(!dir.path().join("unknown.scnf").exists());
        Ok(())
    }

    fn batch_dir() -> anyhow::Result<tempfile::TempDir> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("one.cnf"),
            "p cnf 1 1\nc varname 1 p_{1,2}\n1 0\n",
        )?;
        std::fs::write(
            dir.path().join("two.cnf"),
            "p cnf 1 1\nc varname 1 x_{5}\n-1 0\n",
        )?;
        std::fs::write(dir.path().join("notes.txt"), "1 2\n")?;
        std::fs::create_dir(dir.path().join("sub.cnf"))?;
        Ok(dir)
    }

    #[test]
    fn batch() -> anyhow::Result<()> {
        let dir = batch_dir()?;
        let mut written = translate_dir(dir.path(), Variant::Named, BatchPolicy::FailFast)?;
        written.sort();
        assert_eq!(
            written,
            vec![dir.path().join("one.scnf"), dir.path().join("two.scnf")]
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("one.scnf"))?,
            "((p cnf 1 1)\n ((var 1 2)))"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("two.scnf"))?,
            "((p cnf 1 1)\n ((not (var 5))))"
        );
        Ok(())
    }

    #[test]
    fn batch_policies() -> anyhow::Result<()> {
        let dir = batch_dir()?;
        std::fs::write(dir.path().join("bad.cnf"), "p cnf 1 1\n1 2\n")?;

        assert!(translate_dir(dir.path(), Variant::Named, BatchPolicy::FailFast).is_err());
        assert!(!dir.path().join("bad.scnf").exists());

        let err = translate_dir(dir.path(), Variant::Named, BatchPolicy::KeepGoing).unwrap_err();
        assert!(err.to_string().starts_with("1 of 3 files failed"), "{}", err);
        assert!(dir.path().join("one.scnf").exists());
        assert!(dir.path().join("two.scnf").exists());
        Ok(())
    }
}

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

//! Rendering of parsed CNF files as s-expressions

use crate::dimacs::{Header, NamedInstance, PlainInstance};
use crate::error::TranslateError;
use itertools::Itertools;

fn header_sexp(h: &Header) -> String {
    format!("(p cnf {} {})", h.num_vars, h.num_clauses)
}

/// `((p cnf N M) (l1 l2)(l3)...)`: literals are written as they were in the file and clauses
/// are not separated.
pub fn render_plain(cnf: &PlainInstance) -> String {
    let clauses: String = cnf
        .clauses
        .iter()
        .map(|clause| format!("({})", clause.iter().join(" ")))
        .collect();
    format!("({} {})", header_sexp(&cnf.header), clauses)
}

/// The maximal runs of ASCII digits of `name`, left to right.
///
/// # Example
/// ```
/// use cnfsexp::sexp::digit_runs;
///
/// assert_eq!(digit_runs("p_{12,3}"), vec!["12", "3"]);
/// assert!(digit_runs("x").is_empty());
/// ```
pub fn digit_runs(name: &str) -> Vec<&str> {
    name.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}

/// `(var d1 d2 ...)` where the `di` are the digit runs of `name`
pub fn var_sexp(name: &str) -> String {
    let mut res = String::from("(var");
    for run in digit_runs(name) {
        res.push(' ');
        res.push_str(run);
    }
    res.push(')');
    res
}

/// A literal as `(var ...)`, or `(not (var ...))` when negative.
///
/// `clause` is only used for error reporting.
fn literal_sexp(
    cnf: &NamedInstance,
    clause: usize,
    literal: i64,
) -> Result<String, TranslateError> {
    let name = cnf
        .variables
        .get(&literal.unsigned_abs())
        .ok_or(TranslateError::UnknownVariable { clause, literal })?;
    let var = var_sexp(name);
    Ok(if literal < 0 {
        format!("(not {})", var)
    } else {
        var
    })
}

/// `((p cnf N M)\n (lit lit)\n (lit))` with literals replaced by their declared names.
///
/// Fails on the first literal whose variable has no declared name.
pub fn render_named(cnf: &NamedInstance) -> Result<String, TranslateError> {
    let mut clauses = Vec::with_capacity(cnf.clauses.len());
    for (index, clause) in cnf.clauses.iter().enumerate() {
        let literals = clause
            .iter()
            .map(|&l| literal_sexp(cnf, index + 1, l))
            .collect::<Result<Vec<String>, _>>()?;
        clauses.push(format!("({})", literals.join(" ")));
    }
    Ok(format!(
        "({}\n {})",
        header_sexp(&cnf.header),
        clauses.join("\n ")
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimacs::{parse_named, parse_plain};

    #[test]
    fn plain() -> anyhow::Result<()> {
        assert_eq!(
            render_plain(&parse_plain("p cnf 2 1\n1 -2 0\n")?),
            "((p cnf 2 1) (1 -2))"
        );
        assert_eq!(
            render_plain(&parse_plain("p cnf 2 3\n1 -2 0\n2 0\n0\n")?),
            "((p cnf 2 3) (1 -2)(2)())"
        );
        Ok(())
    }

    #[test]
    fn plain_header_only() -> anyhow::Result<()> {
        assert_eq!(
            render_plain(&parse_plain("c nothing\np cnf 007 0\n")?),
            "((p cnf 7 0) )"
        );
        assert_eq!(render_plain(&parse_plain("1 0\n")?), "((p cnf 0 0) )");
        Ok(())
    }

    #[test]
    fn named() -> anyhow::Result<()> {
        assert_eq!(
            render_named(&parse_named("p cnf 1 1\nc varname 1 p_{1,2}\n1 0\n")?)?,
            "((p cnf 1 1)\n ((var 1 2)))"
        );
        assert_eq!(
            render_named(&parse_named("p cnf 1 1\nc varname 1 x_{5}\n-1 0\n")?)?,
            "((p cnf 1 1)\n ((not (var 5))))"
        );
        Ok(())
    }

    #[test]
    fn named_several_clauses() -> anyhow::Result<()> {
        let cnf = parse_named(
            "p cnf 2 2\nc varname 1 a_{1}\nc varname 2 b\n1 -2 0\n-1 2 1 0\n",
        )?;
        assert_eq!(
            render_named(&cnf)?,
            "((p cnf 2 2)\n ((var 1) (not (var)))\n ((not (var 1)) (var) (var 1)))"
        );
        Ok(())
    }

    #[test]
    fn named_header_only() -> anyhow::Result<()> {
        assert_eq!(
            render_named(&parse_named("p cnf 4 0\n")?)?,
            "((p cnf 4 0)\n )"
        );
        Ok(())
    }

    #[test]
    fn unknown_variable() -> anyhow::Result<()> {
        let cnf = parse_named("p cnf 2 2\nc varname 1 x\n1 0\n1 -2 0\n")?;
        assert_eq!(
            render_named(&cnf),
            Err(TranslateError::UnknownVariable {
                clause: 2,
                literal: -2
            })
        );
        Ok(())
    }

    #[test]
    fn runs() {
        assert_eq!(digit_runs("p_{1,2}"), vec!["1", "2"]);
        assert_eq!(digit_runs("12ab034c5"), vec!["12", "034", "5"]);
        assert_eq!(var_sexp("q"), "(var)");
        assert_eq!(var_sexp("x_{10,0,3}"), "(var 10 0 3)");
    }

    #[test]
    fn clause_count_is_preserved() -> anyhow::Result<()> {
        let input = "p cnf 3 4\nc varname 1 v1\nc varname 2 v2\nc varname 3 v3\n1 0\n-2 3 0\n\n2 -3 1 0\n-1 0\n";
        let named = render_named(&parse_named(input)?)?;
        assert_eq!(named.lines().count(), 1 + 4);
        assert!(!named.contains(" 0"));
        let plain = render_plain(&parse_plain(input)?);
        assert_eq!(plain.matches('(').count(), 2 + 4);
        assert!(!plain.contains(" 0"));
        Ok(())
    }
}

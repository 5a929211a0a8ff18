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

//! Line oriented parser for simplified DIMACS CNF files
//!
//! Each line is split on whitespace and classified by its first token: no token is a blank
//! line, `c` a comment, `p` the problem header, anything else a clause terminated by `0`.
//! A file without header parses to the empty instance, whatever clauses it contains.

use crate::error::TranslateError;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::trace;

/// Declared sizes of the problem, from the `p cnf <vars> <clauses>` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// number of variables
    pub num_vars: u64,
    /// number of clauses
    pub num_clauses: u64,
}

/// A CNF file where clauses are kept as the literal tokens of the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlainInstance {
    /// sizes from the header
    pub header: Header,
    /// clauses in file order, without the trailing `0`
    pub clauses: Vec<Vec<String>>,
}

/// A CNF file with typed literals and the names declared by `c varname` comments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedInstance {
    /// sizes from the header
    pub header: Header,
    /// variable id to declared name
    pub variables: BTreeMap<u64, String>,
    /// clauses in file order, without the trailing `0`
    pub clauses: Vec<Vec<i64>>,
}

/// Receives the lines of a file which are not blank or the header.
trait LineVisitor {
    /// called on lines starting with `c`. `tokens[0]` is `c`.
    fn visit_comment(&mut self, _line: usize, _tokens: &[&str]) -> Result<(), TranslateError> {
        Ok(())
    }
    /// called on clause lines, with the terminating `0` already removed
    fn visit_clause(&mut self, line: usize, literals: &[&str]) -> Result<(), TranslateError>;
}

/// Classifies every line of `input`, forwards comments and clauses to `visitor` and returns
/// the header if there was one.
fn scan<V: LineVisitor>(input: &str, visitor: &mut V) -> Result<Option<Header>, TranslateError> {
    let mut header = None;
    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.first() {
            None => {}
            Some(&"c") => visitor.visit_comment(line, &tokens)?,
            Some(&"p") => {
                if tokens.len() != 4 || tokens[1] != "cnf" {
                    return Err(TranslateError::MalformedHeader {
                        line,
                        tokens: owned(&tokens),
                    });
                }
                if header.is_some() {
                    return Err(TranslateError::DuplicateHeader {
                        line,
                        tokens: owned(&tokens),
                    });
                }
                let h = Header {
                    num_vars: parser::integer(line, tokens[2], parser::unsigned)?,
                    num_clauses: parser::integer(line, tokens[3], parser::unsigned)?,
                };
                trace!(line, ?h, "problem header");
                header = Some(h);
            }
            Some(_) => match tokens.split_last() {
                Some((&"0", literals)) => visitor.visit_clause(line, literals)?,
                _ => {
                    return Err(TranslateError::UnterminatedClause {
                        line,
                        tokens: owned(&tokens),
                    })
                }
            },
        }
    }
    Ok(header)
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|&t| t.to_owned()).collect()
}

#[derive(Default)]
struct PlainBuilder(Vec<Vec<String>>);

impl LineVisitor for PlainBuilder {
    fn visit_clause(&mut self, _line: usize, literals: &[&str]) -> Result<(), TranslateError> {
        self.0.push(owned(literals));
        Ok(())
    }
}

#[derive(Default)]
struct NamedBuilder {
    variables: BTreeMap<u64, String>,
    clauses: Vec<Vec<i64>>,
}

impl LineVisitor for NamedBuilder {
    fn visit_comment(&mut self, line: usize, tokens: &[&str]) -> Result<(), TranslateError> {
        if tokens.len() < 4 || tokens[1] != "varname" {
            return Ok(());
        }
        let var = parser::integer(line, tokens[2], parser::unsigned)?;
        match self.variables.entry(var) {
            Entry::Occupied(e) => Err(TranslateError::DuplicateVariable {
                line,
                var,
                previous: e.get().clone(),
                name: tokens[3].to_owned(),
            }),
            Entry::Vacant(e) => {
                trace!(line, var, name = tokens[3], "variable name");
                e.insert(tokens[3].to_owned());
                Ok(())
            }
        }
    }

    fn visit_clause(&mut self, line: usize, literals: &[&str]) -> Result<(), TranslateError> {
        let clause = literals
            .iter()
            .map(|&l| parser::integer(line, l, parser::signed))
            .collect::<Result<Vec<i64>, _>>()?;
        self.clauses.push(clause);
        Ok(())
    }
}

/// Parses `input`, keeping literals as they are written in the file.
pub fn parse_plain(input: &str) -> Result<PlainInstance, TranslateError> {
    let mut builder = PlainBuilder::default();
    match scan(input, &mut builder)? {
        Some(header) => Ok(PlainInstance {
            header,
            clauses: builder.0,
        }),
        None => {
            trace!(dropped = builder.0.len(), "no p line, result is empty");
            Ok(PlainInstance::default())
        }
    }
}

/// Parses `input` into integer literals, recording `c varname <id> <name>` declarations.
pub fn parse_named(input: &str) -> Result<NamedInstance, TranslateError> {
    let mut builder = NamedBuilder::default();
    match scan(input, &mut builder)? {
        Some(header) => Ok(NamedInstance {
            header,
            variables: builder.variables,
            clauses: builder.clauses,
        }),
        None => {
            trace!(dropped = builder.clauses.len(), "no p line, result is empty");
            Ok(NamedInstance::default())
        }
    }
}

pub(crate) mod parser {
    use crate::error::TranslateError;
    use nom::character::complete::{char, digit1};
    use nom::combinator::{all_consuming, map_res, opt, recognize};
    use nom::sequence::pair;
    use nom::IResult;

    /// digits with an optional leading `+`
    pub(crate) fn unsigned(s: &str) -> IResult<&str, u64> {
        map_res(recognize(pair(opt(char('+')), digit1)), |x: &str| x.parse())(s)
    }

    /// digits with an optional leading `+` or `-`
    pub(crate) fn signed(s: &str) -> IResult<&str, i64> {
        nom::character::complete::i64(s)
    }

    /// Runs `p` on the whole of `token`.
    pub(crate) fn integer<T>(
        line: usize,
        token: &str,
        p: impl FnMut(&str) -> IResult<&str, T>,
    ) -> Result<T, TranslateError> {
        all_consuming(p)(token)
            .map(|(_, n)| n)
            .map_err(|_| TranslateError::InvalidInteger {
                line,
                token: token.to_owned(),
            })
    }

    #[test]
    fn integers() {
        assert_eq!(integer(1, "12", unsigned), Ok(12));
        assert_eq!(integer(1, "+12", unsigned), Ok(12));
        assert!(integer(1, "-12", unsigned).is_err());
        assert!(integer(1, "12a", unsigned).is_err());
        assert_eq!(integer(1, "-7", signed), Ok(-7));
        assert_eq!(integer(1, "7", signed), Ok(7));
        assert_eq!(
            integer(3, "x", signed),
            Err(TranslateError::InvalidInteger {
                line: 3,
                token: "x".into()
            })
        );
    }
}

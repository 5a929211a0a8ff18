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

//! Errors raised while translating a CNF file

use std::fmt::Display;

/// Everything that can go wrong while parsing a DIMACS file or rendering it.
///
/// Line numbers are 1-based and count every line of the input, blank lines and comments
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A `p` line which is not exactly `p cnf <vars> <clauses>`
    MalformedHeader {
        /// line of the header
        line: usize,
        /// all tokens of the line
        tokens: Vec<String>,
    },
    /// A second `p` line
    DuplicateHeader {
        /// line of the second header
        line: usize,
        /// all tokens of the line
        tokens: Vec<String>,
    },
    /// A clause line whose last token is not `0`
    UnterminatedClause {
        /// line of the clause
        line: usize,
        /// all tokens of the line
        tokens: Vec<String>,
    },
    /// `c varname <id> <name>` for an id which already has a name
    DuplicateVariable {
        /// line of the second declaration
        line: usize,
        /// variable id
        var: u64,
        /// name of the first declaration
        previous: String,
        /// name of the second declaration
        name: String,
    },
    /// A token that should be an integer and is not
    InvalidInteger {
        /// line of the token
        line: usize,
        /// the token itself
        token: String,
    },
    /// A literal whose variable has no `c varname` declaration
    UnknownVariable {
        /// 1-based index of the clause in the file
        clause: usize,
        /// the literal, with its sign
        literal: i64,
    },
}

impl Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TranslateError::MalformedHeader { line, tokens } => write!(
                f,
                "p line had unexpected form at line {}: {:?}",
                line, tokens
            ),
            TranslateError::DuplicateHeader { line, tokens } => write!(
                f,
                "saw more than one p line, again at line {}: {:?}",
                line, tokens
            ),
            TranslateError::UnterminatedClause { line, tokens } => write!(
                f,
                "clause should be 0-terminated at line {}: {:?}",
                line, tokens
            ),
            TranslateError::DuplicateVariable {
                line,
                var,
                previous,
                name,
            } => write!(
                f,
                "variable {} named {:?} at line {} was already named {:?}",
                var, name, line, previous
            ),
            TranslateError::InvalidInteger { line, token } => {
                write!(f, "expected an integer at line {}, got {:?}", line, token)
            }
            TranslateError::UnknownVariable { clause, literal } => write!(
                f,
                "literal {} of clause {} refers to a variable without varname",
                literal, clause
            ),
        }
    }
}

impl std::error::Error for TranslateError {}

//! The grammar of the analyzed language and its precomputed SLR(1) parse
//! table.
//!
//! Production 0 (`S -> CODE`) augments the grammar, so accepting the input
//! stands in for reducing it and the root of every parse tree is a `CODE`
//! node.

use crate::errors::Result;
use crate::grammar::Grammar;
use crate::parsers::lr::{ParseTable, Parser};

/// Terminal symbols, in parse table column order
pub const TERMINALS: [&str; 21] = [
    "vtype", "id", "semi", "assign", "literal", "character", "boolstr", "addsub", "multdiv",
    "lparen", "rparen", "num", "lbrace", "rbrace", "comma", "if", "while", "comp", "else", "return",
    "class",
];

/// Non-terminal symbols, in parse table column order after the end marker
pub const NON_TERMINALS: [&str; 18] = [
    "S", "CODE", "VDECL", "ASSIGN", "RHS", "EXPR", "TERM", "FACTOR", "FDECL", "ARG", "MOREARGS",
    "BLOCK", "STMT", "COND", "ELSE", "RETURN", "CDECL", "ODECL",
];

/// Productions, indexed from zero in the order they appear
pub const PRODUCTIONS: &str = "\
S -> CODE
CODE -> VDECL CODE
CODE -> FDECL CODE
CODE -> CDECL CODE
CODE -> e
VDECL -> vtype id semi
VDECL -> vtype ASSIGN semi
ASSIGN -> id assign RHS
RHS -> EXPR
RHS -> literal
RHS -> character
RHS -> boolstr
EXPR -> EXPR addsub TERM
EXPR -> TERM
TERM -> TERM multdiv FACTOR
TERM -> FACTOR
FACTOR -> lparen EXPR rparen
FACTOR -> id
FACTOR -> num
FDECL -> vtype id lparen ARG rparen lbrace BLOCK RETURN rbrace
ARG -> vtype id MOREARGS
ARG -> e
MOREARGS -> comma vtype id MOREARGS
MOREARGS -> e
BLOCK -> STMT BLOCK
BLOCK -> e
STMT -> VDECL
STMT -> ASSIGN semi
STMT -> if lparen COND rparen lbrace BLOCK rbrace ELSE
STMT -> while lparen COND rparen lbrace BLOCK rbrace
COND -> COND comp boolstr
COND -> boolstr
ELSE -> else lbrace BLOCK rbrace
ELSE -> e
RETURN -> return RHS semi
CDECL -> class id lbrace ODECL rbrace
ODECL -> VDECL ODECL
ODECL -> FDECL ODECL
ODECL -> e
";

/// One row per automaton state, one comma-separated cell per terminal, the
/// end marker, and non-terminal, in that order. `s N` shifts to state N,
/// `r N` reduces by production N, `acc` accepts, a bare number is a goto
/// target, and an empty cell has no action.
pub const TABLE: &str = "\
s 5,,,,,,,,,,,,,,,,,,,,s 6,r 4,,1,2,,,,,,3,,,,,,,,4,
,,,,,,,,,,,,,,,,,,,,,acc,,,,,,,,,,,,,,,,,,
s 5,,,,,,,,,,,,,,,,,,,,s 6,r 4,,7,2,,,,,,3,,,,,,,,4,
s 5,,,,,,,,,,,,,,,,,,,,s 6,r 4,,8,2,,,,,,3,,,,,,,,4,
s 5,,,,,,,,,,,,,,,,,,,,s 6,r 4,,9,2,,,,,,3,,,,,,,,4,
,s 10,,,,,,,,,,,,,,,,,,,,,,,,11,,,,,,,,,,,,,,
,s 12,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,,,,,,,,,r 1,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,,,,,,,,,r 2,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,,,,,,,,,r 3,,,,,,,,,,,,,,,,,,
,,s 13,s 15,,,,,,s 14,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,s 16,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,s 17,,,,,,,,,,,,,,,,,,,,,,,,,,,
r 5,r 5,,,,,,,,,,,,r 5,,r 5,r 5,,,r 5,r 5,r 5,,,,,,,,,,,,,,,,,,
s 19,,,,,,,,,,r 21,,,,,,,,,,,,,,,,,,,,,18,,,,,,,,
,s 28,,,s 22,s 23,s 24,,,s 27,,s 29,,,,,,,,,,,,,,,20,21,25,26,,,,,,,,,,
r 6,r 6,,,,,,,,,,,,r 6,,r 6,r 6,,,r 6,r 6,r 6,,,,,,,,,,,,,,,,,,
s 5,,,,,,,,,,,,,r 38,,,,,,,,,,,31,,,,,,32,,,,,,,,,30
,,,,,,,,,,s 33,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,s 34,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 7,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 8,,,,,s 35,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 9,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 10,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 11,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 13,,,,,r 13,s 36,,r 13,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 15,,,,,r 15,r 15,,r 15,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,s 28,,,,,,,,s 27,,s 29,,,,,,,,,,,,,,,,37,25,26,,,,,,,,,,
,,r 17,,,,,r 17,r 17,,r 17,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 18,,,,,r 18,r 18,,r 18,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,s 38,,,,,,,,,,,,,,,,,,,,,,,,,,
s 5,,,,,,,,,,,,,r 38,,,,,,,,,,,31,,,,,,32,,,,,,,,,39
s 5,,,,,,,,,,,,,r 38,,,,,,,,,,,31,,,,,,32,,,,,,,,,40
,,,,,,,,,,,,s 41,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,r 23,,,,s 43,,,,,,,,,,,,,,,,,,42,,,,,,,
,s 28,,,,,,,,s 27,,s 29,,,,,,,,,,,,,,,,,44,26,,,,,,,,,,
,s 28,,,,,,,,s 27,,s 29,,,,,,,,,,,,,,,,,,45,,,,,,,,,,
,,,,,,,s 35,,,s 46,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
r 35,,,,,,,,,,,,,,,,,,,,r 35,r 35,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,r 36,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,r 37,,,,,,,,,,,,,,,,,,,,,,,,,,
s 53,s 54,,,,,,,,,,,,r 25,,s 51,s 52,,,r 25,,,,,49,50,,,,,,,,47,48,,,,,
,,,,,,,,,,r 20,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
s 55,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 12,,,,,r 12,s 36,,r 12,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 14,,,,,r 14,r 14,,r 14,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,r 16,,,,,r 16,r 16,,r 16,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,,,,,,,s 57,,,,,,,,,,,,,,,,,,56,,
s 53,s 54,,,,,,,,,,,,r 25,,s 51,s 52,,,r 25,,,,,49,50,,,,,,,,58,48,,,,,
r 26,r 26,,,,,,,,,,,,r 26,,r 26,r 26,,,r 26,,,,,,,,,,,,,,,,,,,,
,,s 59,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,s 60,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,s 61,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,s 62,,,,,,,,,,,,,,,,,,,,,,,,11,,,,,,,,,,,,,,
,,,s 15,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,s 63,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,s 64,,,,,,,,,,,,,,,,,,,,,,,,,,
,s 28,,,s 22,s 23,s 24,,,s 27,,s 29,,,,,,,,,,,,,,,65,21,25,26,,,,,,,,,,
,,,,,,,,,,,,,r 24,,,,,,r 24,,,,,,,,,,,,,,,,,,,,
r 27,r 27,,,,,,,,,,,,r 27,,r 27,r 27,,,r 27,,,,,,,,,,,,,,,,,,,,
,,,,,,s 67,,,,,,,,,,,,,,,,,,,,,,,,,,,,,66,,,,
,,,,,,s 67,,,,,,,,,,,,,,,,,,,,,,,,,,,,,68,,,,
,,s 13,s 15,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,r 23,,,,s 43,,,,,,,,,,,,,,,,,,69,,,,,,,
r 19,,,,,,,,,,,,,r 19,,,,,,,r 19,r 19,,,,,,,,,,,,,,,,,,
,,s 70,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,s 71,,,,,,,s 72,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,r 31,,,,,,,r 31,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,s 73,,,,,,,s 72,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,r 22,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,r 34,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,s 74,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,s 75,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,s 76,,,,,,,,,,,,,,,,,,,,,,,,,,,
s 53,s 54,,,,,,,,,,,,r 25,,s 51,s 52,,,r 25,,,,,49,50,,,,,,,,77,48,,,,,
,,,,,,,,,,r 30,,,,,,,r 30,,,,,,,,,,,,,,,,,,,,,,
s 53,s 54,,,,,,,,,,,,r 25,,s 51,s 52,,,r 25,,,,,49,50,,,,,,,,78,48,,,,,
,,,,,,,,,,,,,s 79,,,,,,,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,,s 80,,,,,,,,,,,,,,,,,,,,,,,,,,
r 33,r 33,,,,,,,,,,,,r 33,,r 33,r 33,,s 82,r 33,,,,,,,,,,,,,,,,,81,,,
r 29,r 29,,,,,,,,,,,,r 29,,r 29,r 29,,,r 29,,,,,,,,,,,,,,,,,,,,
r 28,r 28,,,,,,,,,,,,r 28,,r 28,r 28,,,r 28,,,,,,,,,,,,,,,,,,,,
,,,,,,,,,,,,s 83,,,,,,,,,,,,,,,,,,,,,,,,,,,
s 53,s 54,,,,,,,,,,,,r 25,,s 51,s 52,,,r 25,,,,,49,50,,,,,,,,84,48,,,,,
,,,,,,,,,,,,,s 85,,,,,,,,,,,,,,,,,,,,,,,,,,
r 32,r 32,,,,,,,,,,,,r 32,,r 32,r 32,,,r 32,,,,,,,,,,,,,,,,,,,,
";

/// Returns the grammar of the language
pub fn grammar() -> Result<Grammar> {
    Grammar::new(&TERMINALS, &NON_TERMINALS, PRODUCTIONS)
}

/// Returns the decoded parse table for the language
pub fn table() -> Result<ParseTable> {
    ParseTable::new(grammar()?, TABLE)
}

/// Returns a parser for the language
pub fn parser() -> Result<Parser<ParseTable>> {
    Ok(Parser::new(table()?))
}

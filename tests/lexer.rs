use slr::lexer::{Lexer, TokenInfo};
mod common;

#[test]
fn test_lexer() {
    let tokens = Lexer::tokenize(&common::read_test_file("programs/ifelse.txt"));
    assert_eq!(tokens.len(), 25);
    assert_eq!(tokens[0], TokenInfo::new("vtype", 1, 1));
    assert_eq!(tokens[6], TokenInfo::new("lparen", 2, 2));
    assert_eq!(tokens[24], TokenInfo::new("rbrace", 8, 1));
}

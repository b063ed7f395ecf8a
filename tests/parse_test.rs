mod common;
use common::*;
use std::rc::Rc;
use tl::lang::ast::*;
use tl::lang::{lex, parse, ErrorCode, Operator};

fn parse_str(s: &str) -> Option<Statement> {
    let (_, tokens) = lex(s);
    parse(1, &tokens).ok()
}

fn round_trip(s: &str) {
    let statement = parse_str(s).unwrap();
    let rendered = statement.to_string();
    assert_eq!(parse_str(&rendered), Some(statement), "{} => {}", s, rendered);
}

#[test]
fn test_round_trip() {
    round_trip("let x = 3");
    round_trip("let x = y");
    round_trip("let x = a * 2.5");
    round_trip("if x >= limit goto done");
    round_trip("if flag goto top");
    round_trip("input n");
    round_trip("print \"a\", x, 'b'");
    round_trip("print 'say \"hi\"'");
    round_trip("print");
}

#[test]
fn test_render() {
    assert_eq!(
        parse_str("if   x  !=  0   goto  top").unwrap().to_string(),
        "if x != 0 goto top"
    );
    assert_eq!(
        parse_str("print 'a' , 1.50").unwrap().to_string(),
        "print \"a\", 1.5"
    );
}

#[test]
fn test_binary_keeps_raw_operands() {
    assert_eq!(
        parse_str("let x = 007 - y"),
        Some(Statement::Let(
            Rc::from("x"),
            Expression::Binary(Operand::new("007"), Operator::Minus, Operand::new("y"))
        ))
    );
}

#[test]
fn test_syntax_error_reports_line() {
    assert_eq!(
        run("print 1\nlet x 5\nprint 2"),
        "Syntax Error on line 2\n"
    );
    assert_eq!(run("print 1\n\nprint 2"), "Syntax Error on line 2\n");
    assert_eq!(run("print 1\nlabel:"), "Syntax Error on line 2\n");
    assert_eq!(run("PRINT 1"), "Syntax Error on line 1\n");
}

#[test]
fn test_first_error_wins() {
    let (_, tokens) = lex("if x ? y goto z");
    let error = parse(7, &tokens).unwrap_err();
    assert_eq!(error.code(), ErrorCode::SyntaxError);
    assert_eq!(error.line_number(), Some(7));
    assert_eq!(run("let\nlet"), "Syntax Error on line 1\n");
}

#[test]
fn test_windows_line_endings() {
    assert_eq!(run("let x = 2\r\nprint x\r\n"), "2\n");
}

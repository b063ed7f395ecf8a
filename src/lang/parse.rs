use super::{ast::*, number, Error, LineNumber, Operator, Word};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parse the tokens of one de-labelled line into a statement.
pub fn parse(line_number: LineNumber, tokens: &[Rc<str>]) -> Result<Statement> {
    Parser::parse(tokens).map_err(|e| e.in_line_number(line_number))
}

/// Parse a 1- or 3-token expression.
pub fn expression<T: AsRef<str>>(tokens: &[T]) -> Result<Expression> {
    match tokens {
        [token] => {
            let token = token.as_ref();
            Ok(match number(token) {
                Some(n) => Expression::Number(n),
                None => Expression::Var(Rc::from(token)),
            })
        }
        [lhs, op, rhs] => match Operator::from_token(op.as_ref()) {
            Some(op) => Ok(Expression::Binary(
                Operand::new(lhs.as_ref()),
                op,
                Operand::new(rhs.as_ref()),
            )),
            None => Err(error!(SyntaxError; "EXPECTED OPERATOR")),
        },
        _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
    }
}

struct Parser<'a> {
    tokens: &'a [Rc<str>],
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Rc<str>]) -> Result<Statement> {
        let parse = Parser { tokens };
        parse.statement()
    }

    fn statement(&self) -> Result<Statement> {
        match self.tokens.first().and_then(|t| Word::from_token(t)) {
            Some(word) => Statement::for_word(self, word),
            None => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn token(&self, index: usize) -> Result<&'a Rc<str>> {
        match self.tokens.get(index) {
            Some(t) => Ok(t),
            None => Err(error!(SyntaxError; "UNEXPECTED END OF LINE")),
        }
    }

    fn is_word(&self, index: usize, word: Word) -> bool {
        match self.tokens.get(index) {
            Some(t) => Word::from_token(t) == Some(word),
            None => false,
        }
    }

    /// Arguments of `print`. Whitespace between tokens is dropped before
    /// splitting on commas, so it does not survive inside quotes either.
    fn printer_list(&self) -> Result<Vec<PrintItem>> {
        let rest = &self.tokens[1..];
        if rest.is_empty() {
            return Ok(vec![]);
        }
        let joined: String = rest.iter().map(|t| &**t).collect();
        let mut v: Vec<PrintItem> = vec![];
        for segment in joined.split(',') {
            if is_quoted(segment) {
                let text = &segment[1..segment.len() - 1];
                v.push(PrintItem::Text(Rc::from(text)));
            } else {
                let tokens: Vec<&str> = segment.split_whitespace().collect();
                v.push(PrintItem::Expression(expression(&tokens)?));
            }
        }
        Ok(v)
    }
}

fn is_quoted(s: &str) -> bool {
    let is_quote = |c: char| c == '"' || c == '\'';
    let mut chars = s.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => is_quote(first) && is_quote(last),
        _ => false,
    }
}

impl Statement {
    fn for_word(parse: &Parser, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Let => Self::r#let(parse),
            If => Self::r#if(parse),
            Input => Self::r#input(parse),
            Print => Self::r#print(parse),
            Goto => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &Parser) -> Result<Statement> {
        let var = parse.token(1)?;
        if &**parse.token(2)? != "=" {
            return Err(error!(SyntaxError; "EXPECTED ="));
        }
        let expr = expression(&parse.tokens[3..])?;
        Ok(Statement::Let(var.clone(), expr))
    }

    fn r#if(parse: &Parser) -> Result<Statement> {
        if parse.is_word(2, Word::Goto) {
            let label = parse.token(3)?;
            let expr = expression(&parse.tokens[1..2])?;
            return Ok(Statement::If(expr, label.clone()));
        }
        if parse.is_word(4, Word::Goto) {
            let label = parse.token(5)?;
            let expr = expression(&parse.tokens[1..4])?;
            return Ok(Statement::If(expr, label.clone()));
        }
        Err(error!(SyntaxError; "EXPECTED GOTO"))
    }

    fn r#input(parse: &Parser) -> Result<Statement> {
        Ok(Statement::Input(parse.token(1)?.clone()))
    }

    fn r#print(parse: &Parser) -> Result<Statement> {
        Ok(Statement::Print(parse.printer_list()?))
    }
}

use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::LineNumber;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    label: Option<Rc<str>>,
    tokens: Vec<Rc<str>>,
}

impl Line {
    pub fn new(number: LineNumber, s: &str) -> Line {
        let (label, tokens) = lex(s);
        Line {
            number,
            label,
            tokens,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn label(&self) -> Option<&Rc<str>> {
        self.label.as_ref()
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        parse(self.number, &self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        match &self.label {
            Some(label) if s.is_empty() => write!(f, "{}:", label),
            Some(label) => write!(f, "{}: {}", label, s),
            None => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_stripped() {
        let line = Line::new(4, "top: print x");
        assert_eq!(line.number(), 4);
        assert_eq!(line.label().map(|l| &**l), Some("top"));
        assert_eq!(line.ast(), Ok(Statement::Print(vec![PrintItem::Expression(
            Expression::Var(Rc::from("x"))
        )])));
    }

    #[test]
    fn test_display() {
        assert_eq!(Line::new(1, "  top:   let  x =  1 ").to_string(), "top: let x = 1");
        assert_eq!(Line::new(1, "done:").to_string(), "done:");
    }

    #[test]
    fn test_syntax_error_has_line_number() {
        let e = Line::new(12, "top:").ast().unwrap_err();
        assert_eq!(e.to_string(), "Syntax Error on line 12");
    }
}

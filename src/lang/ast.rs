use super::{number, Operator};
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Let(Rc<str>, Expression),
    If(Expression, Rc<str>),
    Input(Rc<str>),
    Print(Vec<PrintItem>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(f64),
    Var(Rc<str>),
    Binary(Operand, Operator, Operand),
}

/// A raw operand token of a binary expression.
///
/// Whether it is a literal or a variable is decided every time it is
/// evaluated, so a variable assigned after parsing is seen.
#[derive(Debug, PartialEq, Clone)]
pub struct Operand(Rc<str>);

#[derive(Debug, PartialEq, Clone)]
pub enum PrintItem {
    Text(Rc<str>),
    Expression(Expression),
}

impl Operand {
    pub fn new(token: &str) -> Operand {
        Operand(Rc::from(token))
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    pub fn literal(&self) -> Option<f64> {
        number(&self.0)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Let(var, expr) => write!(f, "let {} = {}", var, expr),
            If(expr, label) => write!(f, "if {} goto {}", expr, label),
            Input(var) => write!(f, "input {}", var),
            Print(items) => {
                write!(f, "print")?;
                for (i, item) in items.iter().enumerate() {
                    if i == 0 {
                        write!(f, " {}", item)?;
                    } else {
                        write!(f, ", {}", item)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Var(var) => write!(f, "{}", var),
            Binary(lhs, op, rhs) => write!(f, "{} {} {}", lhs, op, rhs),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PrintItem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PrintItem::Text(s) => {
                if s.contains('"') {
                    write!(f, "'{}'", s)
                } else {
                    write!(f, "\"{}\"", s)
                }
            }
            PrintItem::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

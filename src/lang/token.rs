#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Goto,
    If,
    Input,
    Let,
    Print,
}

impl Word {
    pub fn from_token(s: &str) -> Option<Word> {
        use Word::*;
        match s {
            "goto" => Some(Goto),
            "if" => Some(If),
            "input" => Some(Input),
            "let" => Some(Let),
            "print" => Some(Print),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Goto => write!(f, "goto"),
            If => write!(f, "if"),
            Input => write!(f, "input"),
            Let => write!(f, "let"),
            Print => write!(f, "print"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl Operator {
    pub fn from_token(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "+" => Some(Plus),
            "-" => Some(Minus),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "<" => Some(Less),
            ">" => Some(Greater),
            "<=" => Some(LessEqual),
            ">=" => Some(GreaterEqual),
            "==" => Some(Equal),
            "!=" => Some(NotEqual),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            LessEqual => write!(f, "<="),
            GreaterEqual => write!(f, ">="),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
        }
    }
}

use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }

    /// Errors raised below the statement level know nothing of lines.
    /// The caller attaches one on the way up; an existing one is kept.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    UndefinedVariable,
    IllegalGoto,
    InvalidInput,
    DivisionByZero,
    DuplicateLabel,
    Break,
    FileNotFound,
    DiskIoError,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "Error {{ {} }}", self)
        } else {
            write!(f, "Error {{ {}; {} }}", self, self.message)
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let line = match self.line_number {
            Some(n) => n.to_string(),
            None => "?".to_string(),
        };
        match self.code {
            SyntaxError => write!(f, "Syntax Error on line {}", line),
            UndefinedVariable => {
                write!(f, "Undefined variable {} at line {}", self.message, line)
            }
            IllegalGoto => write!(f, "illegal goto {} at line {}", self.message, line),
            InvalidInput => write!(f, "Illegal or missing input"),
            DivisionByZero => write!(f, "Division by zero at line {}", line),
            DuplicateLabel => write!(f, "Duplicate label {} on line {}", self.message, line),
            Break => write!(f, "Break at line {}", line),
            FileNotFound => write!(f, "File not found: {}", self.message),
            DiskIoError => write!(f, "{}", self.message),
        }
    }
}

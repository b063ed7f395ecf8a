use std::rc::Rc;

/// Split a source line into tokens and peel off its label.
///
/// A label is a leading token ending in `:`. It is returned without the
/// colon and does not appear in the token list.
pub fn lex(s: &str) -> (Option<Rc<str>>, Vec<Rc<str>>) {
    let mut tokens = s.split_whitespace();
    let mut label = None;
    let mut v: Vec<Rc<str>> = vec![];
    if let Some(first) = tokens.next() {
        match first.strip_suffix(':') {
            Some(name) => label = Some(Rc::from(name)),
            None => v.push(Rc::from(first)),
        }
    }
    v.extend(tokens.map(Rc::from));
    (label, v)
}

/// The numeric literal grammar: at most one `.`, everything else ASCII
/// digits, and at least one digit. No signs and no exponents, so `-1`
/// and `1e3` are names as far as TL is concerned.
pub fn number(s: &str) -> Option<f64> {
    let mut digits = 0;
    let mut decimal = false;
    for ch in s.chars() {
        if ch == '.' {
            if decimal {
                return None;
            }
            decimal = true;
        } else if ch.is_ascii_digit() {
            digits += 1;
        } else {
            return None;
        }
    }
    if digits == 0 {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let (label, tokens) = lex("loop:  if x < 10 goto loop");
        assert_eq!(label.as_deref(), Some("loop"));
        assert_eq!(tokens.len(), 6);
        assert_eq!(&*tokens[0], "if");
    }

    #[test]
    fn test_no_label() {
        let (label, tokens) = lex("\tlet x = 3\r");
        assert_eq!(label, None);
        let tokens: Vec<&str> = tokens.iter().map(|t| &**t).collect();
        assert_eq!(tokens, ["let", "x", "=", "3"]);
    }

    #[test]
    fn test_label_only() {
        let (label, tokens) = lex("end:");
        assert_eq!(label.as_deref(), Some("end"));
        assert!(tokens.is_empty());
        let (label, tokens) = lex("   ");
        assert_eq!(label, None);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_number() {
        assert_eq!(number("42"), Some(42.0));
        assert_eq!(number("3.25"), Some(3.25));
        assert_eq!(number(".5"), Some(0.5));
        assert_eq!(number("7."), Some(7.0));
        assert_eq!(number("."), None);
        assert_eq!(number("1.2.3"), None);
        assert_eq!(number("-1"), None);
        assert_eq!(number("1e3"), None);
        assert_eq!(number("x1"), None);
        assert_eq!(number(""), None);
    }
}

mod common;
use common::*;
use tl::mach::{Options, Runtime};

#[test]
fn test_let_and_print() {
    assert_eq!(run("let x = 3 + 4\nprint x"), "7\n");
}

#[test]
fn test_print_mixed_items() {
    assert_eq!(run("let x = 5\nprint \"a\", x, \"b\""), "a 5 b\n");
    assert_eq!(run("let x = 5\nprint 'a',x,'b'"), "a 5 b\n");
}

#[test]
fn test_print_fractions() {
    assert_eq!(run("let x = 7 / 2\nprint x, 0.25, 10"), "3.5 0.25 10\n");
}

#[test]
fn test_print_nothing() {
    assert_eq!(run("print\nprint \"x\""), "\nx\n");
}

#[test]
fn test_print_loses_inner_spaces() {
    assert_eq!(run("print \"hello world\""), "helloworld\n");
}

#[test]
fn test_reassign() {
    assert_eq!(run("let x = 1\nlet x = x + 1\nprint x"), "2\n");
}

#[test]
fn test_loop_with_label() {
    let source = "\
let x = 0
loop: let x = x + 1
print x
let y = x
let z = y
let w = z
if x < 10 goto loop
print \"done\"";
    let expected: String = (1..=10).map(|n| format!("{}\n", n)).collect();
    assert_eq!(run(source), expected + "done\n");
}

#[test]
fn test_branch_falls_through_on_zero() {
    assert_eq!(run("if 0 goto end\nprint 1\nend: print 2"), "1\n2\n");
    assert_eq!(run("if 1 goto end\nprint 1\nend: print 2"), "2\n");
}

#[test]
fn test_single_token_conditions() {
    assert_eq!(run("let f = 0\nif f goto end\nprint 1\nend: print 2"), "1\n2\n");
    assert_eq!(run("let f = 0.5\nif f goto end\nprint 1\nend: print 2"), "2\n");
}

#[test]
fn test_forward_reference() {
    assert_eq!(run("if 2 > 1 goto skip\nprint \"no\"\nskip: print \"yes\""), "yes\n");
}

#[test]
fn test_illegal_goto() {
    assert_eq!(
        run("print 1\nif 1 goto nowhere\nprint 2"),
        "1\nillegal goto nowhere at line 2\n"
    );
}

#[test]
fn test_illegal_goto_only_when_taken() {
    assert_eq!(run("if 0 goto nowhere\nprint 2"), "2\n");
}

#[test]
fn test_undefined_variable_stops() {
    assert_eq!(
        run("print 1\nlet y = x + 1\nprint 2"),
        "1\nUndefined variable x at line 2\n"
    );
}

#[test]
fn test_duplicate_label_last_wins() {
    assert_eq!(
        run("if 1 goto a\na: print 1\na: print 2"),
        "2\n"
    );
}

#[test]
fn test_duplicate_label_strict() {
    let options = Options {
        strict_labels: true,
        ..Options::default()
    };
    assert_eq!(
        run_with("if 1 goto a\na: print 1\na: print 2", options),
        "Duplicate label a on line 3\n"
    );
}

#[test]
fn test_infinite_loop_is_interruptible() {
    let mut r = Runtime::default();
    r.load("let x = 0\ntop: let x = x + 1\nif 1 goto top").unwrap();
    assert_eq!(exec_n(&mut r, 100), "\n100 Execution cycles exceeded.\n");
    r.interrupt();
    assert!(exec(&mut r).starts_with("Break at line "));
    assert!(r.vars().fetch("x").unwrap() > 50.0);
}

#[test]
fn test_reload_clears_variables() {
    let mut r = Runtime::default();
    r.load("let x = 1").unwrap();
    assert_eq!(exec(&mut r), "");
    r.load("print x").unwrap();
    assert_eq!(exec(&mut r), "Undefined variable x at line 1\n");
}

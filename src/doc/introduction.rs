/*!
# Introductory Tutorial for TL

TL runs one program file from start to finish. Save the following as
`hello.tl` and run it with `tl hello.tl`.

```text
print "Hello", "World"
```
```text
Hello World
```

A TL program is a list of lines, one statement per line. There are four
statements: `let`, `if`, `input` and `print`. Words on a line are
separated by spaces and the spaces matter. `let x = 1` is a statement,
`let x=1` is a syntax error.

Execution starts at the first line and moves down one line at a time.
When it moves past the last line the program ends. The only way to go
anywhere else is an `if` with a label.

```text
let n = 1
loop: print n
let n = n + 1
if n <= 3 goto loop
print "done"
```
```text
1
2
3
done
```

A label is any word ending in a colon at the very start of a line.
Jumping to it runs the statement that follows it on the same line.

## Numbers

Every variable holds a number. A number written in a program is digits
with at most one decimal point: `7`, `0.25`, `.5`. There are no negative
literals and no exponents. Write `let m = 0 - 5` for minus five.

Anything that isn't a number is a variable name. Using a variable before
it has a value stops the program.

```text
print y
```
```text
Undefined variable y at line 1
```

## Expressions

An expression is one thing, or two things with an operator between them.
There are no parentheses and no longer chains. Use more `let` lines.

| Operator | Meaning |
|---|---|
| `+` `-` `/` | Arithmetic |
| `*` | Subtraction. Yes, really. See `--product-multiply` |
| `<` `>` `<=` `>=` `==` `!=` | Comparison, `1` when true and `0` when false |

## Errors

Syntax errors are found before anything runs. One bad line means no line
runs at all.

```text
print "first"
let x 5
```
```text
Syntax Error on line 2
```

Stop a running program with CTRL-C.

## Options

* `--product-multiply` makes `*` multiply.
* `--strict-labels` makes a label defined twice a load error instead of
  the later one silently winning.
* `TL_LOG=trace` traces every executed line to stderr.

*/

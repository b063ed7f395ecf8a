/*!
# `if <expression> goto <label>`

## Purpose
Jump to a label when the expression is not zero.

## Remarks
The expression is a single number or variable, or a three word
expression such as `x < 10`. The label may be defined anywhere in the
program, before or after the `if`. If the label doesn't exist an
`illegal goto` error occurs, but only when the jump is taken.

## Example
```text
let x = 0
top: let x = x + 1
if x < 3 goto top
print x
```
```text
3
```

*/

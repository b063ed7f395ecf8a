/*!
# `print [<item>[, <item>...]]`

## Purpose
Output a line to the terminal.

## Remarks
Items are strings in double or single quotes, or expressions, separated by
commas. They are printed with one space between them. A `print` by itself
outputs an empty line.

The words of a `print` line are glued together before the commas are
found. Spaces inside quotes are lost and an expression like `x + 1` is
read as the variable `x+1`. Compute it with `let` first.

## Example
```text
let x = 5
print "a", x, 'b'
```
```text
a 5 b
```

*/

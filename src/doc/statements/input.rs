/*!
# `input <variable>`

## Purpose
Suspends execution and reads one line from the terminal.

## Remarks
The line must be a number. Anything else, including no line at all,
prints `Illegal or missing input` and ends the program.

## Example
```text
input age
let next = age + 1
print "next:", next
```

*/

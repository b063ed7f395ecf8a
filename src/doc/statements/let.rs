/*!
# `let <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Example
```text
let a = 10
let b = a / 4
print b
```
```text
2.5
```

*/

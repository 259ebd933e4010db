#[macro_use]
mod common;

#[cfg(test)]
mod assignment {
    tests! {
        syntax in assignment is OK
        "after"
        "arg"
        "arg"
    }

    tests! {
        associativity in assignment is OK
        "c"
        "c"
        "c"
    }

    tests! {
        grouping in assignment is ERR(65)
        "[line 2] Error at '=': Invalid assignment target."
    }

    tests! {
        infix_operator in assignment is ERR(65)
        "[line 3] Error at '=': Invalid assignment target."
    }

    tests! {
        to_this in assignment is ERR(65)
        "[line 3] Error at '=': Invalid assignment target."
    }
}

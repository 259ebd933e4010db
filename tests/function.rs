#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        parameters in function is OK
        "0"
        "1"
        "3"
        "6"
    }

    tests! {
        recursion in function is OK
        "21"
    }

    tests! {
        local_functions in function is OK
        "inner"
    }

    tests! {
        missing_arguments in function is ERR(70)
        "Expected 2 arguments but got 1."
        "[line 2]"
    }

    tests! {
        extra_arguments in function is ERR(70)
        "Expected 2 arguments but got 4."
        "[line 5]"
    }

    tests! {
        too_many_arguments in function is ERR(65)
        "[line 259] Error at 'a': Can't have more than 255 arguments."
    }

    tests! {
        too_many_parameters in function is ERR(65)
        "[line 257] Error at 'p256': Can't have more than 255 parameters."
    }
}

#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        scope in for is OK
        "0"
        "-1"
        "before"
    }

    tests! {
        continue_runs_increment in for is OK
        "1"
        "2"
        "4"
        "5"
    }

    tests! {
        break_exits in for is OK
        "1"
        "2"
        "done"
    }

    tests! {
        closure_in_body in for is OK
        "4"
        "1"
        "4"
        "2"
        "4"
        "3"
    }

    tests! {
        statement_initializer in for is ERR(65)
        "[line 1] Error at '{': Expect expression."
        "[line 1] Error at ')': Expect ';' after expression."
    }
}

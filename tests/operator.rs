#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        add in operator is OK
        "579"
        "string"
    }

    tests! {
        add_mixed in operator is ERR(70)
        "Operands must be numbers or strings."
        "[line 1]"
    }

    tests! {
        negate in operator is OK
        "-3"
        "3"
        "-3"
    }

    tests! {
        negate_non_number in operator is ERR(70)
        "Operand must be a number."
        "[line 1]"
    }

    tests! {
        comparison in operator is OK
        "true"
        "true"
        "false"
        "true"
    }

    tests! {
        comparison_non_number in operator is ERR(70)
        "Operands must be numbers."
        "[line 1]"
    }

    tests! {
        divide in operator is OK
        "4"
        "3.5"
    }

    tests! {
        multiply in operator is OK
        "6"
        "2"
    }

    tests! {
        subtract in operator is OK
        "1"
        "0.5"
    }

    tests! {
        equals in operator is OK
        "true"
        "true"
        "false"
        "true"
        "false"
        "true"
        "false"
        "false"
        "false"
        "false"
    }

    tests! {
        not_equals in operator is OK
        "false"
        "false"
        "true"
        "true"
    }

    tests! {
        equals_method in operator is OK
        "true"
        "false"
    }
}

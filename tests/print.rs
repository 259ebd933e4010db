#[macro_use]
mod common;

#[cfg(test)]
mod print {
    tests! {
        basic in print is OK
        "one"
        "true"
        "3"
    }

    tests! {
        functions in print is OK
        "<fn foo>"
        "<native fn>"
    }

    tests! {
        classes in print is OK
        "Bagel"
        "Bagel instance"
    }
}

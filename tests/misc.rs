#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        precedence in misc is OK
        "14"
        "8"
        "4"
        "true"
        "0"
        "2"
    }

    tests! {
        unexpected_character in misc is ERR(65)
        "[line 1] Error: Unexpected character '|'."
    }
}

#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        uninitialized in variable is OK
        "nil"
    }

    tests! {
        redefine_global in variable is OK
        "2"
    }

    tests! {
        shadow_local in variable is OK
        "shadow"
        "local"
    }

    tests! {
        scope_reuse_in_different_blocks in variable is OK
        "first"
        "second"
    }

    tests! {
        use_in_own_initializer in variable is ERR(65)
        "[line 2] Error at 'a': Can't read local variable in its own initializer."
    }

    tests! {
        duplicate_local in variable is ERR(65)
        "[line 3] Error at 'a': Already a variable with this name in this scope."
    }

    tests! {
        undefined_global in variable is ERR(70)
        "Undefined variable 'missing'."
        "[line 1]"
    }

    tests! {
        undefined_assign in variable is ERR(70)
        "Undefined variable 'missing'."
        "[line 1]"
    }
}

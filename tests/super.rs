#[macro_use]
mod common;

#[cfg(test)]
mod _super {
    tests! {
        call_same_method in super is OK
        "Derived.foo()"
        "Base.foo()"
    }

    tests! {
        call_other_method in super is OK
        "Derived.bar()"
        "Base.foo()"
    }

    tests! {
        constructor in super is OK
        "Derived.init()"
        "Base.init(a, b)"
    }

    tests! {
        indirectly_inherited in super is OK
        "C.foo()"
        "A.foo()"
    }

    tests! {
        closure in super is OK
        "A"
    }

    tests! {
        reassign_superclass in super is OK
        "Base.method()"
        "Base.method()"
    }

    tests! {
        no_superclass_bind in super is ERR(65)
        "[line 3] Error at 'super': Can't use 'super' in a class with no superclass."
    }

    tests! {
        no_superclass_method in super is ERR(70)
        "Undefined property 'doesNotExist'."
        "[line 4]"
    }

    tests! {
        at_top_level in super is ERR(65)
        "[line 1] Error at 'super': Can't use 'super' outside of a class."
    }

    tests! {
        without_dot in super is ERR(65)
        "[line 4] Error at ';': Expect '.' after 'super'."
    }

    tests! {
        without_name in super is ERR(65)
        "[line 4] Error at ';': Expect superclass method name."
    }
}

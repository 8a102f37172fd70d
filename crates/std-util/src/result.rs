#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual=Err({e})"),
        }
    };
}

/// Asserts that an expression fails with an error for which the given
/// predicate holds, e.g. `assert_classified!(res, is_duplicate)`.
///
/// Evaluates to the error.
#[macro_export]
macro_rules! assert_classified {
    ($e:expr, $predicate:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$predicate(),
            "expected error to satisfy `{}`; actual={}",
            stringify!($predicate),
            err
        );
        err
    }};
}

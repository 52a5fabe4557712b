/// Asserts that evaluating `$run` panics. The value it produces, if any, is discarded.
///
/// The evaluation is wrapped in [`AssertUnwindSafe`](std::panic::AssertUnwindSafe): the
/// collections under test are never observed again after the panic.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:expr) => {
        assert_panics!($run, "evaluation was expected to panic but returned normally")
    };
    ($run:expr, $msg:literal) => {{
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = $run;
        }));
        assert!(outcome.is_err(), $msg);
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

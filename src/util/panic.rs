/// Asserts that the provided block panics, catching the panic so that the test can continue.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        log::debug!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

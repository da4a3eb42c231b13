/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// An optional format string is appended to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(err) => err,
            Ok(value) => panic!("expected `Err`; got Ok({:?})", value),
        }
    };
    ($e:expr, $($fmt:tt)+) => {
        match $e {
            Err(err) => err,
            Ok(value) => panic!("expected `Err`; got Ok({:?}); {}", value, format!($($fmt)+)),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error's display and debug forms
/// otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(err) => panic!("expected `Ok`; error={err}; debug={err:#?}"),
        }
    };
}

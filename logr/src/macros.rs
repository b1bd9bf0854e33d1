/// Formats and logs at ERROR, on the default logger or on `logger: <expr>`.
///
/// ```
/// let logger = logr::Logger::new();
/// logr::errorf!("failed after {} retries", 3);
/// logr::errorf!(logger: logger, "failed after {} retries", 3);
/// ```
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Formats and logs at INFO. See [`errorf!`].
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Formats and logs at DEBUG. See [`errorf!`].
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Formats a `level=FATAL` line and exits the process.
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}

/// Name of the function this macro is expanded in, without its module path.
///
/// Closures are skipped, so inside a closure the enclosing function is named.
///
/// ```
/// fn load_config() -> &'static str {
///     logr::get_caller!()
/// }
/// assert_eq!(load_config(), "load_config");
/// ```
#[macro_export]
macro_rules! get_caller {
    () => {{
        fn here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::caller::unqualified_name(type_name_of(here).strip_suffix("::here").unwrap_or(""))
    }};
}

#[cfg(feature = "defmt")]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => {::defmt::debug!($($tt)*)};
}

// no logger: still touch the arguments so log-only bindings stay used
#[cfg(not(feature = "defmt"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

// Prints solver diagnostics to stderr when built with the 'debug' feature.
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

//! Macros for last-resort debugging.
//!
//! Every error produced by the writer is a contract violation by the code
//! composing the encoding. When such an error shows up far away from where
//! the offending call was made, it helps to know where it originated. The
//! macro `xerr!()` prints a backtrace at that point if the `extra-debug`
//! feature is enabled and otherwise simply resolves into the expression it
//! encloses. Wrap it around every place an error is first produced:
//!
//! ```rust,ignore
//! if self.pos < len {
//!     xerr!(return Err(EncodeError::capacity()))
//! }
//! ```

#[cfg(feature = "extra-debug")]
pub use backtrace::Backtrace;

#[cfg(feature = "extra-debug")]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        eprintln!(
            "--- EXTRA DEBUG ---\n{:?}\n--- EXTRA DEBUG ---",
            $crate::debug::Backtrace::new()
        );
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => { $test };
}

//! Assertion macros with descriptive failure messages.

/// Assert that stdout or stderr contains the expected pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the process exit code, dumping output on mismatch.
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code,
            $code,
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            $result.stdout,
            $result.stderr
        );
    };
}

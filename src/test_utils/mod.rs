//! Shared test utilities for proclens.

pub mod fixtures;

/// Table-driven test case.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

impl<I, E> TestCase<I, E> {
    pub const fn new(name: &'static str, input: I, expected: E) -> Self {
        Self {
            name,
            input,
            expected,
        }
    }
}

/// Run every case through `test_fn`, reporting the failing case by name.
pub fn run_table_tests<I, E, A, F>(cases: &[TestCase<I, E>], test_fn: F)
where
    I: std::fmt::Debug + Clone,
    E: std::fmt::Debug,
    A: std::fmt::Debug + PartialEq<E>,
    F: Fn(I) -> A,
{
    for case in cases {
        let start = std::time::Instant::now();
        let actual = test_fn(case.input.clone());
        println!(
            "[TEST] {}: {:?} -> {:?} ({:?})",
            case.name,
            case.input,
            actual,
            start.elapsed()
        );
        assert_eq!(actual, case.expected, "case '{}' failed", case.name);
    }
}

//! Black-box tests for the rest-err crates, see `tests/`

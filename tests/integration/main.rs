//! Integration tests for volaudit
//!
//! These tests exercise the compiled binary end to end against snapshot
//! fixtures in temporary directories.

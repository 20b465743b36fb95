// Test module entry point for hash tests
// All hash-related tests organized here

mod report_tests;
mod error_tests;

//! Android JNI test harness for droidnotify.
//!
//! The library is loaded by the test app's `MainActivity`; each button calls
//! one of the `Java_com_droidnotify_test_MainActivity_*` functions, which
//! returns a markdown report for the results view.
//!
//! To build: cargo ndk -t arm64-v8a build -p droidnotify-test-android
//!
//! Add new scenarios by:
//! 1. Adding a check to [`checks::default_checks`], or
//! 2. Adding a JNI function and a matching native declaration in MainActivity.kt

pub mod report;
pub mod results;

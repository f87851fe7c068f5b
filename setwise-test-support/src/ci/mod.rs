//! Continuous-integration knobs shared by setwise test suites.

pub mod property_test_profile;

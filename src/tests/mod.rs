mod registry_tests;
mod utils;

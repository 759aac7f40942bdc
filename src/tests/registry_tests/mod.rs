mod space_tests;
mod sponsor_tests;

mod scanner_tests;
mod utils;

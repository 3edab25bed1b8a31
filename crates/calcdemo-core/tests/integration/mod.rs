mod basic_tests;
mod scenario_tests;

mod main_tests;
mod offer_tests;

mod label_tests;
mod layout_tests;

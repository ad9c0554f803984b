mod error_code_test;

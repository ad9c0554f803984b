pub mod test_logging;

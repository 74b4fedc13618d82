// Integration tests for the figo client

mod common;

mod notification_tests;
mod payment_tests;

//! Integration test entry point.

mod helpers;

mod category_test;
mod item_test;

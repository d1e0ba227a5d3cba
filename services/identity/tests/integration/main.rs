mod helpers;

mod account_test;
mod register_test;
mod token_test;

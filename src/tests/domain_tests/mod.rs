mod message_tests;
mod model_tests;
mod search_tests;

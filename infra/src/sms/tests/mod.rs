mod create_switch_tests;
mod http_service_tests;

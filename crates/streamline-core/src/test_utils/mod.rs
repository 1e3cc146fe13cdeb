pub mod fake_api;
pub mod mock_api_server;

use lg_core::logger::init_logger;
use lingomat::clients::openai::CompletionClient;
use lingomat::server;
use std::sync::Arc;
use tracing::error;

fn main() {
    init_logger();

    let client = Arc::new(CompletionClient::from_env());

    if let Err(err) = server::http_server(client) {
        error!("{err}");
    }
}

/// Worker protocol: the client used in production and the service it talks to
mod api_types;
mod worker_client;
mod worker_server;

pub use api_types::ApiResponse;
pub use worker_client::WorkerClient;
pub use worker_server::{worker_router, WorkerError, WorkerState};

mod routes;
mod server;
mod state;
mod ui;

pub use server::run_api_server;

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use pm_internship::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

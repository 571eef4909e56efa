// tests/integration/mod.rs

mod fetch_pipeline;
mod response_fixtures;

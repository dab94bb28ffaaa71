mod api;

pub use api::EnrichmentClient;

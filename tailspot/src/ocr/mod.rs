mod provider;

pub use provider::OcrProvider;

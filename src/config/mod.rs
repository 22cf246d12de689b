pub mod settings;

pub use settings::{DecoderSettings, LoggingSettings, Settings};

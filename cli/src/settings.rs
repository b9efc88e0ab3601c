use config::ConfigError;
use interaxplot_core::RenderSettings;
use std::{ops::Deref, path::PathBuf};

#[derive(Debug, Deserialize)]
pub struct Logging {
    pub debug: bool,
}

/// File names of the reports, relative to the data directory.
#[derive(Debug, Deserialize)]
pub struct Input {
    pub agent_report: String,
    pub interaction_report: String,
}

#[derive(Debug, Deserialize)]
pub struct Output {
    pub file: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: Logging,
    pub input: Input,
    pub output: Output,
    pub render: RenderSettings,
}

impl Settings {
    pub fn with_file<S: Deref<Target = str>>(config_file: Option<S>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            // Use the included default configuration
            .add_source(config::File::from_str(
                include_str!("default-settings.toml"),
                config::FileFormat::Toml,
            ));

        if let Some(config_file) = config_file {
            builder = builder.add_source(config::File::new(&config_file, config::FileFormat::Toml));
        }

        // e.g. INTERAXPLOT__RENDER__DPI=50
        builder = builder.add_source(
            config::Environment::with_prefix("INTERAXPLOT")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

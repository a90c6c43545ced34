use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ReplayConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub replay: StepSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    /// Local path or http(s) URL of the dataset document.
    pub source: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StepSettings {
    /// Wall-clock tick period.
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
    /// Semantic duration of one sample, used for MW -> kWh integration.
    #[serde(default = "default_step_seconds")]
    pub step_seconds: u32,
}

impl Default for StepSettings {
    fn default() -> Self {
        Self { step_ms: default_step_ms(), step_seconds: default_step_seconds() }
    }
}

fn default_step_ms() -> u64 {
    5000
}

fn default_step_seconds() -> u32 {
    5
}

pub fn load_replay_config() -> anyhow::Result<ReplayConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/replay"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

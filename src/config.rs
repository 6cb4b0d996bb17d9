use crate::prelude::*;

const DEFAULT_INTERVAL_MS: u64 = 100;

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    interval_ms: u64,
    hour_hand: crate::clock::HourHandMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            hour_hand: crate::clock::HourHandMode::default(),
        }
    }
}

impl Config {
    // an explicitly requested file has to exist, the default one doesn't
    pub fn load(path: Option<&std::path::Path>) -> Result<Self> {
        let file = path
            .map(std::path::Path::to_path_buf)
            .or_else(crate::dirs::config_file);
        match file {
            Some(file)
                if path.is_some() || std::fs::metadata(&file).is_ok() =>
            {
                let contents = std::fs::read(&file).with_context(|| {
                    format!("couldn't read {}", file.display())
                })?;
                Self::parse(&contents).with_context(|| {
                    format!("couldn't parse {}", file.display())
                })
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn parse(contents: &[u8]) -> Result<Self> {
        let config: Self = toml::from_slice(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(
        &mut self,
        interval_ms: Option<u64>,
        unmodded_hour: bool,
    ) -> Result<()> {
        if let Some(interval_ms) = interval_ms {
            self.interval_ms = interval_ms;
        }
        if unmodded_hour {
            self.hour_hand = crate::clock::HourHandMode::Unmodded;
        }
        self.validate()
    }

    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.interval_ms)
    }

    pub fn hour_hand(&self) -> crate::clock::HourHandMode {
        self.hour_hand
    }

    fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            anyhow::bail!("interval_ms must be greater than zero");
        }
        Ok(())
    }
}

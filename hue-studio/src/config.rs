use anyhow::{Context, Result};
use derivative::Derivative;
use log::debug;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(default)]
    pub hue: Hue,

    #[serde(default)]
    pub output: Output,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Hue {
    // degrees, used when no --hue is given
    #[derivative(Default(value = "180.0"))]
    pub default: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Output {
    // empty: next to the input image
    pub dir: String,

    #[derivative(Default(value = "\"_hue\".to_string()"))]
    pub suffix: String,

    pub compare: bool,
}

impl Config {
    /// Loads the configuration file, creating it with defaults when missing.
    ///
    /// `path` overrides the platform config location
    /// (`<config dir>/hue-studio/hue-studio.toml`).
    pub fn init(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };

        let mut config = Config {
            config_path,
            ..Default::default()
        };

        config
            .load()
            .with_context(|| format!("load config file {} failed", config.config_path.display()))?;

        debug!("{:?}", config);
        Ok(config)
    }

    /// Loads configuration from file or creates default if not exists
    ///
    /// A file that does not parse is kept as `<file>.bak` and replaced.
    fn load(&mut self) -> Result<()> {
        match fs::read_to_string(&self.config_path) {
            Ok(text) => match toml::from_str::<Config>(&text) {
                Ok(mut c) => {
                    c.config_path = self.config_path.clone();
                    c.is_first_run = self.is_first_run;
                    *self = c;
                    Ok(())
                }
                Err(e) => {
                    log::warn!(
                        "parse {} failed, restore defaults: {e}",
                        self.config_path.display()
                    );

                    self.is_first_run = true;
                    let mut bak_file = self.config_path.clone().into_os_string();
                    bak_file.push(".bak");
                    _ = fs::copy(&self.config_path, bak_file);

                    self.save()
                }
            },
            Err(_) => {
                self.is_first_run = true;
                self.save()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let text = toml::to_string_pretty(self)?;
        fs::write(&self.config_path, text)?;
        debug!("save config to {}", self.config_path.display());

        Ok(())
    }
}

fn default_config_path() -> Result<PathBuf> {
    let app_dirs =
        AppDirs::new(Some(APP_NAME), true).context("no config directory on this platform")?;
    Ok(app_dirs.config_dir.join(format!("{APP_NAME}.toml")))
}

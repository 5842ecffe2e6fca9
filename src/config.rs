use crate::error::{Result, YtrelloError};
use crate::model::CheckedList;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".ytrello.yml";

/// Contents of a `.ytrello.yml` file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YtrelloConfig {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Replaces the built-in table of checked lists when present.
    #[serde(default)]
    pub checked_lists: Option<Vec<CheckedList>>,
}

impl YtrelloConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: YtrelloConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search `start_path` and its ancestors for a config file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let Some(lists) = &self.checked_lists else {
            return Ok(());
        };
        if lists.is_empty() {
            return Err(YtrelloError::Config(
                "checked_lists must not be empty".to_string(),
            ));
        }
        for (i, l) in lists.iter().enumerate() {
            if l.board.trim().is_empty() || l.id.trim().is_empty() {
                return Err(YtrelloError::Config(format!(
                    "checked_lists[{}]: board and id must not be empty",
                    i
                )));
            }
        }
        Ok(())
    }
}

/// Everything a run needs to know, passed by reference to whoever needs it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
    pub checked_lists: Vec<CheckedList>,
    /// File the settings were read from, if any.
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            log_file: None,
            checked_lists: CheckedList::builtin(),
            config_path: None,
        }
    }
}

impl From<YtrelloConfig> for Settings {
    fn from(config: YtrelloConfig) -> Self {
        Self {
            verbose: config.verbose,
            log_file: config.log_file,
            checked_lists: config
                .checked_lists
                .unwrap_or_else(CheckedList::builtin),
            config_path: None,
        }
    }
}

impl Settings {
    /// Load settings from an explicit file, or from the nearest
    /// `.ytrello.yml` above `cwd`, or fall back to the defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => YtrelloConfig::find_config_file(cwd),
        };
        match path {
            Some(p) => {
                let mut settings: Settings = YtrelloConfig::load(&p)?.into();
                settings.config_path = Some(p);
                Ok(settings)
            }
            None => Ok(Self::default()),
        }
    }

    /// Checked lists, optionally narrowed to one list ID.
    pub fn select_lists(&self, only: Option<&str>) -> Result<Vec<CheckedList>> {
        match only {
            None => Ok(self.checked_lists.clone()),
            Some(id) => self
                .checked_lists
                .iter()
                .find(|l| l.id == id)
                .cloned()
                .map(|l| vec![l])
                .ok_or_else(|| YtrelloError::Config(format!("{} is not a checked list", id))),
        }
    }
}

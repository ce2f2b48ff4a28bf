use std::env;
use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::{
    Error,
    core::{
        config::Config,
        contact_store::DEFAULT_FILE_NAME,
        Result
    },
};

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "dataDir")]
    data_dir    : Option<String>,
    #[serde(rename = "fileName")]
    file_name   : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

pub struct Builder<'a> {
    data_dir    : Option<String>,
    file_name   : Option<&'a str>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            data_dir    : None,
            file_name   : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_data_dir(&mut self, input: &str) -> &mut Self {
        self.data_dir = Some(expand_home(input));
        self
    }

    pub fn with_file_name(&mut self, name: &'a str) -> &mut Self {
        self.file_name = Some(name);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    // Keeps the level from the config file, or the default one.
    pub fn with_log_file(&mut self, file: &'a str) -> &mut Self {
        self.log_file = Some(file);
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn expand_home(input: &str) -> String {
    let Some(rest) = input.strip_prefix('~') else {
        return input.to_string();
    };
    match env::var("HOME") {
        Ok(home) => format!("{home}{rest}"),
        Err(_) => input.to_string(),
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                data_dir    : None,
                file_name   : None,
                logger      : None,
            }
        };

        if let Some(dir) = b.data_dir.as_ref() {
            cfg.data_dir = Some(dir.to_string());
        } else if let Some(dir) = cfg.data_dir.take() {
            cfg.data_dir = Some(expand_home(&dir));
        }

        if let Some(name) = b.file_name {
            cfg.file_name = Some(name.to_string());
        }

        if cfg.file_name.as_ref().map(|v| v.is_empty()).unwrap_or(false) {
            return Err(Error::Argument("bad config, empty contacts file name".into()));
        }

        let level_from_cfg = match cfg.logger.as_ref() {
            Some(logger) => Some(logger.level.parse::<LevelFilter>().map_err(|_| {
                Error::Argument(format!("bad config, invalid log level '{}'", logger.level))
            })?),
            None => None,
        };
        let file_from_cfg = cfg.logger.as_ref().and_then(|v| v.file.clone());

        let level = b.log_level.or(level_from_cfg).unwrap_or(LevelFilter::Info);
        cfg.logger = Some(LogCfg {
            level: level.to_string(),
            file: b.log_file.map(|f| f.to_string()).or(file_from_cfg),
            deserde_level: Some(level),
        });

        Ok(cfg)
    }
}

impl Config for Configuration {
    fn data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(".")
    }

    fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dataDir:{},", self.data_dir())?;
        write!(f, "\tfileName:{},", self.file_name())?;
        write!(f, "\tlogger:{}", self.log_level())?;
        if let Some(file) = self.log_file() {
            write!(f, "@{}", file)?;
        }
        Ok(())
    }
}

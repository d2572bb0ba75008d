use crate::models::preferences::{
    AppPreferences, SchoolLevel, TimeFormat, default_opacity, default_school_level,
    default_time_format,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_time_format")]
    pub time_format: TimeFormat,
    #[serde(default = "default_school_level")]
    pub school_level: SchoolLevel,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            time_format: default_time_format(),
            school_level: default_school_level(),
            opacity: default_opacity(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rschooltimer")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rschooltimer")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rschooltimer.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rschooltimer.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A broken file is reported on stderr and replaced by defaults so
    /// read-only commands keep working.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("⚠️  Failed to read configuration file: {}", e);
                return Config::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("⚠️  Failed to parse configuration file: {}", e);
                Config::default()
            }
        }
    }

    /// Write the current configuration back to the config file.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| io::Error::other(format!("Failed to serialize configuration: {}", e)))?;

        fs::write(Self::config_file(), yaml)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rschooltimer.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            time_format: default_time_format(),
            school_level: default_school_level(),
            opacity: default_opacity(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Display preferences as stored in the config file.
    pub fn preferences(&self) -> AppPreferences {
        AppPreferences {
            time_format: self.time_format,
            school_level: self.school_level,
            opacity: self.opacity,
        }
    }
}

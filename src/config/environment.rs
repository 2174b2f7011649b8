//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! son opcionales y tienen un valor por defecto.

use std::env;
use std::str::FromStr;

use crate::repositories::lot_repository::DEFAULT_MAX_LOTS;
use crate::utils::errors::{bad_request_error, AppResult};

/// Formato de la salida de resultados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = crate::utils::errors::AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(bad_request_error(&format!("unknown output format '{}'", other))),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub max_lots: usize,
    pub output_format: OutputFormat,
    pub log_level: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            max_lots: DEFAULT_MAX_LOTS,
            output_format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar desde el entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar usando una función de búsqueda de variables
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_lots = match lookup("PARKING_MAX_LOTS") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| bad_request_error(&format!("PARKING_MAX_LOTS must be a valid number, got '{}'", value)))?,
            None => defaults.max_lots,
        };

        let output_format = match lookup("PARKING_OUTPUT_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.output_format,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            max_lots,
            output_format,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Nivel de log para el subscriber de tracing
    pub fn tracing_level(&self) -> AppResult<tracing::Level> {
        tracing::Level::from_str(self.log_level.trim())
            .map_err(|_| bad_request_error(&format!("LOG_LEVEL is not a valid level: '{}'", self.log_level)))
    }
}

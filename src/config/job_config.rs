use crate::core::Mode;
use crate::utils::error::{ProcessError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Batch of operations run against a single store.
///
/// ```toml
/// [job]
/// name = "nightly"
///
/// [[transform]]
/// input = 12
/// mode = "double"
///
/// [validate]
/// values = [1, 2, 3]
///
/// [append]
/// values = [5, 10000, 7]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub job: JobInfo,
    #[serde(default, rename = "transform")]
    pub transforms: Vec<TransformStep>,
    pub validate: Option<ValuesStep>,
    pub append: Option<ValuesStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformStep {
    pub input: i32,
    pub mode: Mode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesStep {
    #[serde(default)]
    pub values: Vec<i32>,
}

impl JobConfig {
    /// Load a job from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a job from TOML text, substituting environment variables first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProcessError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with its environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProcessError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn name(&self) -> &str {
        &self.job.name
    }

    pub fn validate_values(&self) -> Option<&[i32]> {
        self.validate.as_ref().map(|step| step.values.as_slice())
    }

    pub fn append_values(&self) -> &[i32] {
        self.append
            .as_ref()
            .map(|step| step.values.as_slice())
            .unwrap_or(&[])
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;

        for (i, step) in self.transforms.iter().enumerate() {
            validate_non_empty_string(&format!("transform[{}].mode", i), step.mode.as_str())?;
        }

        Ok(())
    }
}

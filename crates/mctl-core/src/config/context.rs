//! Context configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Contents of the mesheryctl config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MesheryCtlConfig {
    /// Name of the context used when no `--context` override is given
    pub current_context: String,

    /// Named deployment contexts
    pub contexts: BTreeMap<String, Context>,

    /// Settings for the docker platform
    pub compose: ComposeConfig,
}

impl Default for MesheryCtlConfig {
    fn default() -> Self {
        Self {
            current_context: "local".to_string(),
            contexts: BTreeMap::new(),
            compose: ComposeConfig::default(),
        }
    }
}

impl MesheryCtlConfig {
    /// Configuration written by `config init`: a single `local` docker context
    pub fn init_template() -> Self {
        let mut config = Self::default();
        config
            .contexts
            .insert(config.current_context.clone(), Context::default());
        config
    }

    /// Resolve the context to operate on.
    ///
    /// A temporary context name takes precedence over `current_context` for
    /// this lookup only; the config itself is not modified.
    pub fn resolve_context(&self, temp_context: Option<&str>) -> Result<&Context, ConfigError> {
        let name = match temp_context {
            Some(name) => name,
            None if self.current_context.is_empty() => {
                return Err(ConfigError::NoCurrentContext)
            }
            None => self.current_context.as_str(),
        };

        self.contexts
            .get(name)
            .ok_or_else(|| ConfigError::ContextNotFound(name.to_string()))
    }
}

/// A named deployment context
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Meshery server endpoint
    pub endpoint: String,

    /// Path to the auth token for the endpoint
    pub token: Option<String>,

    /// Deployment platform (`docker` or `kubernetes`)
    pub platform: String,

    /// Release channel (`stable` or `edge`)
    pub channel: String,

    /// Release version
    pub version: String,

    /// Components deployed alongside the server
    pub components: Vec<String>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            endpoint: crate::DEFAULT_ENDPOINT.to_string(),
            token: None,
            platform: Platform::Docker.to_string(),
            channel: "stable".to_string(),
            version: "latest".to_string(),
            components: Vec::new(),
        }
    }
}

impl Context {
    /// Parse the configured platform
    pub fn platform(&self) -> Result<Platform, ConfigError> {
        self.platform.parse()
    }
}

/// Platforms a Meshery deployment can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Local containers managed by docker-compose
    Docker,
    /// A Kubernetes cluster
    Kubernetes,
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docker" => Ok(Platform::Docker),
            "kubernetes" => Ok(Platform::Kubernetes),
            _ => Err(ConfigError::UnsupportedPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Docker => write!(f, "docker"),
            Platform::Kubernetes => write!(f, "kubernetes"),
        }
    }
}

/// How the docker platform is driven
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Compose executable
    pub command: String,

    /// Compose file describing the Meshery containers
    #[serde(with = "super::serde_utils::tilde_path")]
    pub file: PathBuf,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            command: "docker-compose".to_string(),
            file: super::default_compose_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CONTEXTS: &str = r#"
current_context = "local"

[contexts.local]
endpoint = "http://localhost:9081"
platform = "docker"
channel = "stable"
version = "latest"

[contexts.gke]
endpoint = "http://10.0.0.12:9081"
platform = "Kubernetes"
channel = "edge"
version = "v0.8.0"
components = ["meshery-istio"]
"#;

    #[test]
    fn test_resolve_current_context() {
        let config: MesheryCtlConfig = toml::from_str(TWO_CONTEXTS).unwrap();
        let ctx = config.resolve_context(None).unwrap();

        assert_eq!(ctx.endpoint, "http://localhost:9081");
        assert_eq!(ctx.platform().unwrap(), Platform::Docker);
    }

    #[test]
    fn test_resolve_temp_context_overrides_current() {
        let config: MesheryCtlConfig = toml::from_str(TWO_CONTEXTS).unwrap();
        let ctx = config.resolve_context(Some("gke")).unwrap();

        assert_eq!(ctx.endpoint, "http://10.0.0.12:9081");
        assert_eq!(ctx.platform().unwrap(), Platform::Kubernetes);
        assert_eq!(ctx.components, vec!["meshery-istio".to_string()]);
        assert_eq!(config.current_context, "local");
    }

    #[test]
    fn test_resolve_unknown_temp_context() {
        let config: MesheryCtlConfig = toml::from_str(TWO_CONTEXTS).unwrap();
        let err = config.resolve_context(Some("minikube")).unwrap_err();

        assert!(matches!(err, ConfigError::ContextNotFound(ref name) if name == "minikube"));
    }

    #[test]
    fn test_resolve_dangling_current_context() {
        let config: MesheryCtlConfig =
            toml::from_str("current_context = \"gone\"\n[contexts.local]\n").unwrap();
        let err = config.resolve_context(None).unwrap_err();

        assert!(matches!(err, ConfigError::ContextNotFound(ref name) if name == "gone"));
    }

    #[test]
    fn test_resolve_without_current_context() {
        let config: MesheryCtlConfig = toml::from_str("current_context = \"\"").unwrap();
        let err = config.resolve_context(None).unwrap_err();

        assert!(matches!(err, ConfigError::NoCurrentContext));
    }

    #[test]
    fn test_empty_file_has_no_contexts() {
        let config: MesheryCtlConfig = toml::from_str("").unwrap();
        let err = config.resolve_context(None).unwrap_err();

        assert!(config.contexts.is_empty());
        assert!(matches!(err, ConfigError::ContextNotFound(ref name) if name == "local"));
    }

    #[test]
    fn test_current_context_without_contexts_table() {
        let config: MesheryCtlConfig = toml::from_str("current_context = \"local\"\n").unwrap();
        let err = config.resolve_context(None).unwrap_err();

        assert!(matches!(err, ConfigError::ContextNotFound(ref name) if name == "local"));
    }

    #[test]
    fn test_init_template_has_local_context() {
        let config = MesheryCtlConfig::init_template();
        let ctx = config.resolve_context(None).unwrap();

        assert_eq!(ctx.endpoint, crate::DEFAULT_ENDPOINT);
        assert_eq!(ctx.platform().unwrap(), Platform::Docker);
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("docker".parse::<Platform>().unwrap(), Platform::Docker);
        assert_eq!(" KUBERNETES ".parse::<Platform>().unwrap(), Platform::Kubernetes);

        let err = "nomad".parse::<Platform>().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedPlatform(ref p) if p == "nomad"));
    }

    #[test]
    fn test_context_defaults() {
        let config: MesheryCtlConfig =
            toml::from_str("current_context = \"bare\"\n[contexts.bare]\n").unwrap();
        let ctx = config.resolve_context(None).unwrap();

        assert_eq!(ctx.endpoint, crate::DEFAULT_ENDPOINT);
        assert_eq!(ctx.platform().unwrap(), Platform::Docker);
        assert_eq!(ctx.channel, "stable");
        assert!(ctx.token.is_none());
    }

    #[test]
    fn test_compose_defaults() {
        let config: MesheryCtlConfig = toml::from_str("").unwrap();

        assert_eq!(config.compose.command, "docker-compose");
        assert_eq!(config.compose.file, crate::config::default_compose_file());
    }

    #[test]
    fn test_compose_override() {
        let config: MesheryCtlConfig = toml::from_str(
            "[compose]\ncommand = \"docker compose\"\nfile = \"/opt/meshery/meshery.yaml\"\n",
        )
        .unwrap();

        assert_eq!(config.compose.command, "docker compose");
        assert_eq!(config.compose.file, PathBuf::from("/opt/meshery/meshery.yaml"));
    }
}

use serde::{Deserialize, Serialize};

/// File name of the optional per-project configuration.
pub const CONFIG_FILE: &str = "dockgen.toml";

/// dockgen.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockgenConfig {
    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Go toolchain image for the build stage
    #[serde(default = "default_build_image")]
    pub build: String,
    /// Base image for the final stage; must provide `apk`
    #[serde(default = "default_runtime_image")]
    pub runtime: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            build: default_build_image(),
            runtime: default_runtime_image(),
        }
    }
}

impl DockgenConfig {
    /// Load from dockgen.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        let exists = config_path
            .try_exists()
            .map_err(|e| crate::Error::ConfigLoad {
                path: config_path.clone(),
                source: e,
            })?;
        if exists {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            tracing::debug!(path = %config_path.display(), "loading config");
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_build_image() -> String {
    "golang:1.10.3".to_owned()
}

fn default_runtime_image() -> String {
    "alpine:3.8".to_owned()
}

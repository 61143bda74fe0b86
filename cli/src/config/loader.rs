//! Simple CLI configuration loader for Beankeeper
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./beankeeper.json or ./.beankeeper/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/beankeeper/config.json or ~/.config/beankeeper/config.json
//! 4. Built-in defaults (no files)
//!
//! `BEANKEEPER_DOCUMENT` and `BEANKEEPER_DEFAULT_PAGE` override the file,
//! and the `--document` / `--default-page` flags override both.

use anyhow::{anyhow, Context, Result};
use beankeeper_core::{RouterSettings, ScrollBehavior, Selectors};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the document path
pub const DOCUMENT_ENV: &str = "BEANKEEPER_DOCUMENT";
/// Environment variable overriding the default page
pub const DEFAULT_PAGE_ENV: &str = "BEANKEEPER_DEFAULT_PAGE";

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Markup file to load (relative paths resolve against the config file)
    pub document: Option<PathBuf>,
    /// Page shown at startup
    pub default_page: Option<String>,
    /// Scroll behavior after navigation
    pub scroll_behavior: Option<ScrollBehavior>,
    /// Selector overrides
    pub selectors: Option<Selectors>,
}

/// Where the page markup comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// The embedded Beankeeper page
    Builtin,
    /// A markup file on disk
    File(PathBuf),
}

impl DocumentSource {
    /// Read the markup for this source
    pub async fn read(&self) -> Result<String> {
        match self {
            DocumentSource::Builtin => Ok(beankeeper_core::dom::BEANKEEPER_MARKUP.to_string()),
            DocumentSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read document: {}", path.display())),
        }
    }

    /// Human readable description
    pub fn describe(&self) -> String {
        match self {
            DocumentSource::Builtin => "built-in Beankeeper page".to_string(),
            DocumentSource::File(path) => path.display().to_string(),
        }
    }
}

/// Fully resolved CLI configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub settings: RouterSettings,
    pub document: DocumentSource,
    /// Config file the values came from, if any
    pub source: Option<PathBuf>,
}

/// CLI configuration loader
#[derive(Debug, Clone, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    document_override: Option<PathBuf>,
    default_page_override: Option<String>,
    /// Directory searched for ./beankeeper.json (defaults to the current directory)
    working_dir: Option<PathBuf>,
    /// XDG config home (defaults to $XDG_CONFIG_HOME or ~/.config)
    config_home: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set document override
    pub fn with_document_override(mut self, path: PathBuf) -> Self {
        self.document_override = Some(path);
        self
    }

    /// Set default page override
    pub fn with_default_page_override(mut self, key: String) -> Self {
        self.default_page_override = Some(key);
        self
    }

    /// Search `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Use `dir` as the XDG config home
    pub fn with_config_home(mut self, dir: PathBuf) -> Self {
        self.config_home = Some(dir);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ResolvedConfig> {
        // Step 1: Find and load base configuration
        let (config, source) = if let Some(override_path) = &self.config_override {
            let (config, path) = self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?;
            (config, Some(path))
        } else {
            self.search_and_load().await?
        };

        if let Some(source) = &source {
            debug!("Using config file: {}", source.display());
        }

        // Step 2: Resolve against the config file location
        let base_dir = source
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        let mut settings = RouterSettings::default();
        if let Some(selectors) = config.selectors {
            settings.selectors = selectors;
        }
        if let Some(behavior) = config.scroll_behavior {
            settings.scroll_behavior = behavior;
        }
        if let Some(page) = config.default_page {
            settings.default_page = page;
        }
        let mut document = config.document.map(|path| match &base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        });

        // Step 3: Apply environment and flag overrides
        if let Some(path) = env_value(DOCUMENT_ENV) {
            document = Some(PathBuf::from(path));
        }
        if let Some(page) = env_value(DEFAULT_PAGE_ENV) {
            settings.default_page = page;
        }
        if let Some(path) = &self.document_override {
            document = Some(path.clone());
        }
        if let Some(page) = &self.default_page_override {
            settings.default_page = page.clone();
        }

        // Validate
        settings
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(ResolvedConfig {
            settings,
            document: document.map_or(DocumentSource::Builtin, DocumentSource::File),
            source,
        })
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<(RawConfig, Option<PathBuf>)> {
        // 1. Working directory
        if let Some((config, path)) = self.try_load_cwd().await? {
            return Ok((config, Some(path)));
        }

        // 2. XDG config directory
        if let Some((config, path)) = self.try_load_xdg().await? {
            return Ok((config, Some(path)));
        }

        // 3. Defaults only
        Ok((RawConfig::default(), None))
    }

    /// Try loading from the working directory
    async fn try_load_cwd(&self) -> Result<Option<(RawConfig, PathBuf)>> {
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        // Try ./beankeeper.json first
        let beankeeper_json = cwd.join("beankeeper.json");
        if beankeeper_json.exists() {
            let config = self.load_file(&beankeeper_json).await?;
            return Ok(Some((config, beankeeper_json)));
        }

        // Try ./.beankeeper/config.json
        let dir_config = cwd.join(".beankeeper").join("config.json");
        if dir_config.exists() {
            let config = self.load_file(&dir_config).await?;
            return Ok(Some((config, dir_config)));
        }

        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<(RawConfig, PathBuf)>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("beankeeper").join("config.json");
            if config_path.exists() {
                let config = self.load_file(&config_path).await?;
                return Ok(Some((config, config_path)));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<(RawConfig, PathBuf)> {
        if path.is_file() {
            Ok((self.load_file(path).await?, path.to_path_buf()))
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                Ok((self.load_file(&config_file).await?, config_file))
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.config_home {
            return Some(dir.clone());
        }
        match std::env::var("XDG_CONFIG_HOME") {
            Ok(xdg_config) if !xdg_config.is_empty() => Some(PathBuf::from(xdg_config)),
            _ => dirs::home_dir().map(|home| home.join(".config")),
        }
    }
}

/// Non-empty value of an environment variable
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Loader isolated from the real working directory and home
    fn isolated(root: &Path) -> CliConfigLoader {
        CliConfigLoader::new()
            .with_working_dir(root.join("work"))
            .with_config_home(root.join("xdg"))
    }

    #[tokio::test]
    async fn test_defaults_without_any_file() {
        let temp_dir = tempdir().unwrap();
        let resolved = isolated(temp_dir.path()).load().await.unwrap();

        assert_eq!(resolved.document, DocumentSource::Builtin);
        assert_eq!(resolved.settings, RouterSettings::default());
        assert!(resolved.source.is_none());
    }

    #[tokio::test]
    async fn test_cwd_config_resolves_relative_document() {
        let temp_dir = tempdir().unwrap();
        let work = temp_dir.path().join("work");
        tokio::fs::create_dir_all(&work).await.unwrap();
        let content = r#"{
            "document": "site/index.html",
            "default_page": "tasks",
            "scroll_behavior": "auto",
            "selectors": { "nav_class": "tab" }
        }"#;
        tokio::fs::write(work.join("beankeeper.json"), content)
            .await
            .unwrap();

        let resolved = isolated(temp_dir.path()).load().await.unwrap();

        assert_eq!(
            resolved.document,
            DocumentSource::File(work.join("site/index.html"))
        );
        assert_eq!(resolved.settings.default_page, "tasks");
        assert_eq!(resolved.settings.scroll_behavior, ScrollBehavior::Auto);
        assert_eq!(resolved.settings.selectors.nav_class, "tab");
        assert_eq!(resolved.settings.selectors.page_class, "page");
        assert_eq!(resolved.source, Some(work.join("beankeeper.json")));
    }

    #[tokio::test]
    async fn test_xdg_config_is_used_when_cwd_has_none() {
        let temp_dir = tempdir().unwrap();
        let xdg = temp_dir.path().join("xdg").join("beankeeper");
        tokio::fs::create_dir_all(&xdg).await.unwrap();
        tokio::fs::write(xdg.join("config.json"), r#"{ "default_page": "beans" }"#)
            .await
            .unwrap();

        let resolved = isolated(temp_dir.path()).load().await.unwrap();

        assert_eq!(resolved.settings.default_page, "beans");
        assert_eq!(resolved.source, Some(xdg.join("config.json")));
    }

    #[tokio::test]
    async fn test_flags_override_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("conf");
        tokio::fs::create_dir_all(&config_dir).await.unwrap();
        tokio::fs::write(
            config_dir.join("config.json"),
            r#"{ "default_page": "beans", "document": "a.html" }"#,
        )
        .await
        .unwrap();

        let resolved = isolated(temp_dir.path())
            .with_config_override(config_dir.clone())
            .with_document_override(PathBuf::from("/tmp/b.html"))
            .with_default_page_override("brews".to_string())
            .load()
            .await
            .unwrap();

        assert_eq!(resolved.settings.default_page, "brews");
        assert_eq!(
            resolved.document,
            DocumentSource::File(PathBuf::from("/tmp/b.html"))
        );
    }

    #[tokio::test]
    async fn test_missing_override_path_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let result = isolated(temp_dir.path())
            .with_config_override(temp_dir.path().join("nope.json"))
            .load()
            .await;

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Config path does not exist"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("broken.json");
        tokio::fs::write(&file, "{ not json").await.unwrap();

        let result = isolated(temp_dir.path())
            .with_config_override(file)
            .load()
            .await;

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to parse config file"));
    }

    #[tokio::test]
    async fn test_invalid_selectors_fail_validation() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("bad.json");
        tokio::fs::write(&file, r#"{ "selectors": { "active_class": "" } }"#)
            .await
            .unwrap();

        let result = isolated(temp_dir.path())
            .with_config_override(file)
            .load()
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_document_source_read() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("index.html");
        tokio::fs::write(&file, "<html/>").await.unwrap();

        let markup = DocumentSource::File(file).read().await.unwrap();
        assert_eq!(markup, "<html/>");

        let builtin = DocumentSource::Builtin.read().await.unwrap();
        assert!(builtin.contains("data-page=\"home\""));

        let missing = DocumentSource::File(temp_dir.path().join("missing.html"));
        assert!(missing.read().await.is_err());
    }
}

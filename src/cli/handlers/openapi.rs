//! OpenAPI command handler

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::api::openapi_document;
use crate::config::Settings;

pub struct OpenApiCommandHandler {
    config: Settings,
}

impl OpenApiCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Writes the pretty-printed document to `output`, or stdout.
    pub fn execute(&self, output: Option<&Path>) -> anyhow::Result<()> {
        let json = self.render()?;

        match output {
            Some(path) => {
                std::fs::write(path, json + "\n")
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "OpenAPI document written");
            }
            None => writeln!(std::io::stdout(), "{json}")?,
        }

        Ok(())
    }

    fn render(&self) -> anyhow::Result<String> {
        openapi_document(&self.config)
            .to_pretty_json()
            .context("Failed to serialize OpenAPI document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_document_to_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("openapi.json");

        OpenApiCommandHandler::new(Settings::default())
            .execute(Some(&path))
            .expect("Should write document");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["info"]["title"], "RentExpress API");
        assert!(value["paths"]["/vehicles/search"]["post"].is_object());
        assert!(value["paths"]["/vehicles/{id}"]["delete"].is_object());
    }

    #[test]
    fn test_document_server_follows_base_path() {
        let mut settings = Settings::default();
        settings.server.base_path = "/api".to_string();

        let json = OpenApiCommandHandler::new(settings).render().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["servers"][0]["url"], "/api");
        assert!(value["paths"]["/vehicles"]["get"].is_object());
    }
}

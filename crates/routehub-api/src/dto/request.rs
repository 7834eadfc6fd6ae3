//! Request DTOs.

use serde::{Deserialize, Serialize};

use routehub_core::error::AppError;
use routehub_docs::RenderFormat;

/// Query string of the document endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocQuery {
    /// `json` (default) or `yaml`.
    pub format: Option<String>,
}

impl DocQuery {
    /// Requested render format, JSON when absent.
    pub fn render_format(&self) -> Result<RenderFormat, AppError> {
        match self.format.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse(),
            _ => Ok(RenderFormat::default()),
        }
    }
}

/// Query string of the export endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    /// Adds a `Content-Disposition: attachment` header when `true`.
    #[serde(default)]
    pub download: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format() {
        let query = DocQuery::default();
        assert_eq!(query.render_format().unwrap(), RenderFormat::Json);

        let query = DocQuery {
            format: Some("yaml".into()),
        };
        assert_eq!(query.render_format().unwrap(), RenderFormat::YamlLike);

        let query = DocQuery {
            format: Some("toml".into()),
        };
        assert!(query.render_format().is_err());
    }
}

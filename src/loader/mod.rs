pub mod parse;

pub use parse::{parse_names, NameFormat};

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid JSON name list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the list contains no names")]
    Empty,
}

/// Where a name list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// The configured list, a path or http(s) URL
    Configured(String),
    /// A file the user picked at runtime
    LocalFile(PathBuf),
}

impl NameSource {
    fn location(&self) -> String {
        match self {
            NameSource::Configured(location) => location.clone(),
            NameSource::LocalFile(path) => path.display().to_string(),
        }
    }

    pub fn is_local_file(&self) -> bool {
        matches!(self, NameSource::LocalFile(_))
    }
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Read and parse a name list. Fails if the source yields no usable names.
pub async fn load_names(source: &NameSource) -> Result<Vec<String>, LoadError> {
    let location = source.location();
    let format = NameFormat::from_location(&location);
    tracing::debug!(%location, ?format, "loading names");

    let text = match source {
        NameSource::Configured(location) if is_url(location) => fetch_text(location).await?,
        _ => tokio::fs::read_to_string(&location)
            .await
            .map_err(|source| LoadError::Io {
                path: location.clone(),
                source,
            })?,
    };

    parse_names(&text, format)
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let to_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(to_err)?;
    response.text().await.map_err(to_err)
}

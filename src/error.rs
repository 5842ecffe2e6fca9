use thiserror::Error;

#[derive(Error, Debug)]
pub enum YtrelloError {
    #[error("Pass the Trello credentials via {key_var} and {token_var} environment variables.")]
    MissingCredentials {
        key_var: &'static str,
        token_var: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Trello returned {status}: {body}")]
    Trello { status: u16, body: String },

    #[error("Bugzilla error {code}: {message}")]
    Bugzilla { code: i64, message: String },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, YtrelloError>;

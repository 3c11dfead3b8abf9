use thiserror::Error;
use crate::models::cli_step::CliStep;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned {status}: {body}")]
    Http {
        url: String,
        status: u16,
        body: String,
    },
    #[error("response from {url} is not valid json: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("create-collection response has no collection.id")]
    MissingCollectionId,
    #[error("invalid endpoint table: {0}")]
    InvalidTable(String),
    #[error("failed to encode body of {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not start postman {step}: {source}")]
    Spawn {
        step: CliStep,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "postman {step} exited with {}: {message}",
        .code.map_or_else(|| "a signal".to_string(), |c| format!("code {}", c))
    )]
    Process {
        step: CliStep,
        code: Option<i32>,
        message: String,
    },
    #[error("collection {collection_id} left with {added} of {total} items: {source}")]
    PartialCollection {
        collection_id: String,
        added: usize,
        total: usize,
        #[source]
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// The error that actually stopped the run, looking through
    /// `PartialCollection`.
    pub fn root(&self) -> &BuildError {
        match self {
            BuildError::PartialCollection { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_error_names_step_and_code() {
        let err = BuildError::Process {
            step: CliStep::Login,
            code: Some(1),
            message: "invalid api key".to_string(),
        };
        assert_eq!(err.to_string(), "postman login exited with code 1: invalid api key");

        let killed = BuildError::Process {
            step: CliStep::Run,
            code: None,
            message: "no output".to_string(),
        };
        assert_eq!(killed.to_string(), "postman collection run exited with a signal: no output");
    }

    #[test]
    fn root_unwraps_partial_collection() {
        let err = BuildError::PartialCollection {
            collection_id: "c-1".to_string(),
            added: 2,
            total: 5,
            source: Box::new(BuildError::MissingCollectionId),
        };
        assert!(matches!(err.root(), BuildError::MissingCollectionId));
        assert!(err.to_string().starts_with("collection c-1 left with 2 of 5 items"));
    }
}

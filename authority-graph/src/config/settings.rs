use crate::errors::AnalysisError;
use std::env;

const EVENTS_PATH: &str = "EVENTS_PATH";
const GRAPH_OUTPUT_PATH: &str = "GRAPH_OUTPUT_PATH";

/// Runtime settings for the authority graph binary.
///
/// Read from the process environment after `.env` loading, the way the rest
/// of the pipeline stages are configured.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the JSON file holding the raw authority event array.
    pub events_path: String,
    /// Destination for the built graph; `None` writes to stdout.
    pub output_path: Option<String>,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` when `EVENTS_PATH` is set, or
    /// `AnalysisError::Config` naming the missing variable.
    pub fn from_env() -> Result<Self, AnalysisError> {
        let events_path =
            env::var(EVENTS_PATH).map_err(|_| AnalysisError::Config(EVENTS_PATH))?;
        let output_path = env::var(GRAPH_OUTPUT_PATH).ok();

        Ok(Self {
            events_path,
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    // Environment-variable tests share process state, so they run under one
    // lock and restore the prior values before returning.
    fn with_env<T>(vars: &[(&str, Option<&str>)], body: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap();
        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(key, _)| ((*key).to_string(), env::var(key).ok()))
            .collect();

        for (key, value) in vars {
            unsafe {
                match value {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }

        let result = body();

        for (key, value) in saved {
            unsafe {
                match value {
                    Some(value) => env::set_var(&key, value),
                    None => env::remove_var(&key),
                }
            }
        }

        result
    }

    #[test]
    fn test_from_env_requires_events_path() {
        let result = with_env(
            &[(EVENTS_PATH, None), (GRAPH_OUTPUT_PATH, None)],
            Settings::from_env,
        );

        assert!(matches!(result, Err(AnalysisError::Config(EVENTS_PATH))));
    }

    #[test]
    fn test_from_env_output_path_is_optional() {
        let settings = with_env(
            &[
                (EVENTS_PATH, Some("/tmp/events.json")),
                (GRAPH_OUTPUT_PATH, None),
            ],
            Settings::from_env,
        )
        .unwrap();

        assert_eq!(settings.events_path, "/tmp/events.json");
        assert_eq!(settings.output_path, None);
    }

    #[test]
    fn test_from_env_reads_output_path_when_set() {
        let settings = with_env(
            &[
                (EVENTS_PATH, Some("/tmp/events.json")),
                (GRAPH_OUTPUT_PATH, Some("/tmp/graph.json")),
            ],
            Settings::from_env,
        )
        .unwrap();

        assert_eq!(settings.output_path, Some("/tmp/graph.json".to_string()));
    }
}

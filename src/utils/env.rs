use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// LectorEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and the local environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct LectorEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for LectorEnv {
    fn default() -> LectorEnv {
        LectorEnv::new()
    }
}

impl LectorEnv {
    /// creates a new environment variable store
    pub fn new() -> LectorEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        LectorEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: LectorEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => Ok(mock_store.get(&key_str).map(|v| v.to_owned())),
            None => match env::var(&key_str) {
                Ok(data) => Ok(Some(data)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(env::VarError::NotUnicode(_)) => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("The value of the environment variable \"{key_str}\" is not valid Unicode."),
                )),
            },
        }?;

        if let Some(result) = &result {
            tracing::debug!("read {}", Self::get_debug_value(key, result));
        } else {
            tracing::trace!("could not find ${}", &key_str);
        }

        Ok(result)
    }

    fn get_debug_value(key: LectorEnvKey, value: &str) -> String {
        let value = if let LectorEnvKey::AccessToken = key {
            mask_token(value)
        } else {
            value.to_string()
        };

        format!("environment variable ${key} = {value}")
    }

    /// sets a variable in the mock store
    #[cfg(test)]
    pub fn insert(&mut self, key: LectorEnvKey, value: &str) {
        tracing::debug!("writing {}", Self::get_debug_value(key, value));
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.into());
        }
    }

    /// unsets a variable in the mock store
    #[cfg(test)]
    pub fn remove(&mut self, key: LectorEnvKey) {
        let key = key.to_string();
        tracing::debug!("removing {}", &key);
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.remove(&key);
        }
    }
}

/// Hides all but the last four characters of a secret
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let visible = if chars.len() > 8 { 4 } else { 0 };
    let hidden = chars.len() - visible;
    std::iter::repeat('*')
        .take(hidden)
        .chain(chars[hidden..].iter().copied())
        .collect()
}

/// LectorEnvKey defines all of the environment variables
/// that are respected by Lector. Each environment variable is
/// prefixed with `LECTOR_` and the suffix is the name of the key
/// converted to SHOUTY_SNAKE_CASE.
/// For example, `LectorEnvKey::AccessToken.to_string()` becomes `LECTOR_ACCESS_TOKEN`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LectorEnvKey {
    Endpoint,
    AccessToken,
    Log,
    TimeoutSecs,
    Retries,
}

impl fmt::Display for LectorEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{self:?}").to_shouty_snake_case();
        write!(fmt, "LECTOR_{dbg}")
    }
}

mod metadata;

pub use metadata::{Code, Metadata, Suggestion};

pub type LectorResult<T> = std::result::Result<T, LectorError>;

use calm_io::stderr;
use console::style;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use std::borrow::BorrowMut;
use std::fmt::{self, Debug, Display};
use std::io;

/// A specialized `Error` type for Lector that wraps `anyhow`
/// and provides some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Serialize, Debug)]
pub struct LectorError {
    #[serde(flatten, serialize_with = "serialize_anyhow")]
    error: anyhow::Error,

    #[serde(flatten)]
    metadata: Metadata,
}

fn serialize_anyhow<S>(error: &anyhow::Error, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut data = serializer.serialize_struct("error", 1)?;
    data.serialize_field("message", &error.to_string())?;
    data.end()
}

impl LectorError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = Metadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    pub fn set_suggestion(&mut self, suggestion: Suggestion) {
        self.metadata.suggestion = Some(suggestion);
    }

    pub fn suggestion(&self) -> Option<&Suggestion> {
        self.metadata.suggestion.as_ref()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub const fn code(&self) -> Option<Code> {
        self.metadata.code
    }

    pub fn print(&self) -> io::Result<()> {
        stderr!("{}", self)?;
        Ok(())
    }

    pub(crate) fn get_json(&self) -> Value {
        json!(self)
    }
}

impl Display for LectorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{code}]:")
        } else {
            "error:".to_string()
        };
        let error_descriptor = style(&error_descriptor_message).red().bold();

        writeln!(formatter, "{} {}", error_descriptor, &self.error)?;

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {suggestion}")?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for LectorError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

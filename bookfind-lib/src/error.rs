pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The errors that a catalog search can fail with.
///
/// A search only talks to the catalog once, so there are exactly two ways
/// it can go wrong: the request never completes, or the response is not
/// the JSON page it should be. An empty result page is neither, callers
/// get it as an ordinary empty list.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// The request to the catalog could not be completed.
    IO,
    /// The catalog response could not be deserialized.
    Deserialize,
}

impl Error {
    /// Creates a new [`Error`] from the [`ErrorKind`] and a message describing it.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::IO => f.write_str("Catalog request failed")?,
            ErrorKind::Deserialize => f.write_str("Malformed catalog response")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

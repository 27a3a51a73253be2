use std::borrow::Cow;

/// Failures of the platform clipboard.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClipboardError {
    /// The platform refused the write (permissions, insecure context...).
    #[error("Clipboard write denied{}: {message}", format_context(.context))]
    Denied { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Clipboard unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Errors routed to the page's diagnostic channel. None of them is fatal.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PageError {
    #[error("Clipboard error{}: {source}", format_context(.context))]
    Clipboard { source: ClipboardError, context: Option<Cow<'static, str>> },

    #[error("Internal page error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to page results.
pub trait PageErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PageError>;
}

impl<T> PageErrorExt<T> for Result<T, PageError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PageError::Clipboard { context: c, .. } | PageError::Internal { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

impl<T> PageErrorExt<T> for Result<T, ClipboardError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PageError> {
        self.map_err(|source| PageError::Clipboard { source, context: Some(context.into()) })
    }
}

impl From<ClipboardError> for PageError {
    fn from(source: ClipboardError) -> Self {
        Self::Clipboard { source, context: None }
    }
}

impl From<&'static str> for PageError {
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for PageError {
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

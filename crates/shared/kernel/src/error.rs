use skyfleet_domain::FieldName;
use std::borrow::Cow;

/// Errors raised by the kernel helpers.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// Layered configuration could not be built or deserialized.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// A value stored under `field` does not have the requested shape.
    #[error("Attribute '{field}' error{}: {source}", format_context(.context))]
    Attribute { field: FieldName, source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// A registry audit reported findings.
    #[error("Registry audit failed{}: {message}", format_context(.context))]
    Audit { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Attaches a human-readable context to a failed kernel operation.
pub trait KernelErrorExt<T> {
    /// # Errors
    /// Passes the original error through with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, KernelError>;
}

impl<T> KernelErrorExt<T> for Result<T, KernelError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                KernelError::Config { context: c, .. }
                | KernelError::Attribute { context: c, .. }
                | KernelError::Audit { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> KernelErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, KernelError> {
        self.map_err(|source| KernelError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for KernelError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

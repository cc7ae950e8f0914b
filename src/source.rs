use crate::allow_list::AllowList;
use crate::constants::env as env_var;
use once_cell::sync::OnceCell;
use std::borrow::Cow;
use std::env::{self, VarError};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub type AllowListLoaderFn = dyn Fn() -> Result<AllowList, ConfigError> + Send + Sync;

/// Failures while reading the allow-list configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable `{variable}` is not valid unicode")]
    NotUnicode { variable: String },
    #[error("allow-list loader failed: {0}")]
    Loader(String),
}

/// Where the filter obtains its allow-list from.
#[derive(Clone)]
pub enum AllowListSource {
    Static(AllowList),
    Env(EnvAllowList),
    Custom(Arc<AllowListLoaderFn>),
}

impl AllowListSource {
    pub fn list(list: AllowList) -> Self {
        Self::Static(list)
    }

    /// Parses `raw` once, up front.
    pub fn parse(raw: &str) -> Self {
        Self::Static(AllowList::parse(raw))
    }

    pub fn env<S: Into<String>>(variable: S) -> Self {
        Self::Env(EnvAllowList::new(variable))
    }

    pub fn custom<F>(loader: F) -> Self
    where
        F: Fn() -> Result<AllowList, ConfigError> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(loader))
    }

    pub fn load(&self) -> Result<Cow<'_, AllowList>, ConfigError> {
        match self {
            AllowListSource::Static(list) => Ok(Cow::Borrowed(list)),
            AllowListSource::Env(source) => source.load().map(Cow::Borrowed),
            AllowListSource::Custom(loader) => loader().map(Cow::Owned),
        }
    }
}

impl Default for AllowListSource {
    fn default() -> Self {
        Self::Static(AllowList::default())
    }
}

impl fmt::Debug for AllowListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowListSource::Static(list) => f.debug_tuple("Static").field(list).finish(),
            AllowListSource::Env(source) => f.debug_tuple("Env").field(source).finish(),
            AllowListSource::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Allow-list read from an environment variable on first use. The result,
/// including a read failure, is kept for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct EnvAllowList {
    variable: String,
    cached: Arc<OnceCell<Result<AllowList, ConfigError>>>,
}

impl EnvAllowList {
    pub fn new<S: Into<String>>(variable: S) -> Self {
        Self {
            variable: variable.into(),
            cached: Arc::new(OnceCell::new()),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn load(&self) -> Result<&AllowList, ConfigError> {
        self.cached
            .get_or_init(|| read_allow_list(&self.variable))
            .as_ref()
            .map_err(ConfigError::clone)
    }
}

impl Default for EnvAllowList {
    fn default() -> Self {
        Self::new(env_var::ALLOWED_ORIGINS)
    }
}

fn read_allow_list(variable: &str) -> Result<AllowList, ConfigError> {
    match env::var(variable) {
        Ok(raw) => Ok(AllowList::parse(&raw)),
        Err(VarError::NotPresent) => Ok(AllowList::default()),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            variable: variable.to_owned(),
        }),
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

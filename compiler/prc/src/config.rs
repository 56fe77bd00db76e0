//! Session configuration.

use std::ffi::OsStr;
use std::path::PathBuf;

use pr_diagnostic::ColorMode;

/// Environment variable holding extra include roots, in platform path-list
/// syntax. Appended after roots given on the command line.
pub const INCLUDE_PATH_ENV: &str = "PR_INCLUDE_PATH";

/// Usage lines for every option [`SessionConfig::parse_args`] accepts.
pub const OPTIONS_HELP: &str = concat!(
    "  -I <dir>           Add an include path (repeatable, searched in order)\n",
    "  --color=<mode>     Diagnostic colors: auto, always, never\n",
    "  --emit-at-end      Hold code generation until every module compiled cleanly\n",
);

/// When compiled modules are handed to code generation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmissionPolicy {
    /// Emit each module as soon as it compiles, if the session has no
    /// errors at that moment. An earlier module stays emitted even if a
    /// later one fails.
    #[default]
    PerModule,
    /// Hold every module until [`Session::finish`](crate::Session::finish),
    /// then emit all of them or none.
    SessionEnd,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("option `{flag}` requires a value")]
    MissingValue { flag: String },
    #[error("{0}")]
    InvalidColor(String),
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Roots searched in order when resolving a module.
    pub include_paths: Vec<PathBuf>,
    pub emission: EmissionPolicy,
    pub color: ColorMode,
}

impl SessionConfig {
    pub fn new(include_paths: Vec<PathBuf>) -> Self {
        SessionConfig {
            include_paths,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_emission(mut self, emission: EmissionPolicy) -> Self {
        self.emission = emission;
        self
    }

    /// Parse command-line options, then append roots from
    /// [`INCLUDE_PATH_ENV`].
    ///
    /// Returns the config and the remaining positional arguments.
    pub fn from_args<I, S>(args: I) -> Result<(Self, Vec<String>), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (mut config, positional) = Self::parse_args(args)?;
        if let Some(list) = std::env::var_os(INCLUDE_PATH_ENV) {
            config.append_path_list(&list);
        }
        Ok((config, positional))
    }

    /// Parse `-I <dir>`, `-I<dir>`, `--emit-at-end` and `--color=<mode>`.
    pub fn parse_args<I, S>(args: I) -> Result<(Self, Vec<String>), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = SessionConfig::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            if arg == "-I" {
                let dir = args.next().ok_or_else(|| ConfigError::MissingValue {
                    flag: "-I".to_string(),
                })?;
                config.include_paths.push(PathBuf::from(dir));
            } else if let Some(dir) = arg.strip_prefix("-I") {
                config.include_paths.push(PathBuf::from(dir));
            } else if arg == "--emit-at-end" {
                config.emission = EmissionPolicy::SessionEnd;
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                config.color = mode.parse().map_err(ConfigError::InvalidColor)?;
            } else if arg.starts_with("--") {
                return Err(ConfigError::UnknownFlag(arg));
            } else {
                positional.push(arg);
            }
        }

        Ok((config, positional))
    }

    /// Append every non-empty entry of a platform path list.
    pub fn append_path_list(&mut self, list: &OsStr) {
        self.include_paths.extend(
            std::env::split_paths(list).filter(|p| !p.as_os_str().is_empty()),
        );
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

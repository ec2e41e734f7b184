//! `csz.json` configuration and its merge with command-line flags.

use anyhow::{Context, Result};
use csz_common::{LanguageVersion, SourceCodeKind};
use csz_declarations::DeclarationOptions;
use csz_syntax::ParseOptions;
use serde::Deserialize;
use std::path::Path;

use crate::args::CliArgs;

/// Contents of a `csz.json` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CszConfig {
    pub language_version: Option<String>,
    pub script: Option<bool>,
    pub submission: Option<bool>,
    pub script_class_name: Option<String>,
}

pub fn parse_config(source: &str) -> Result<CszConfig> {
    let config = serde_json::from_str(source)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<CszConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Settings after layering command-line flags over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Source kind forced onto every tree; `None` keeps each tree's own.
    pub kind: Option<SourceCodeKind>,
    /// Language version forced onto every tree.
    pub language_version: Option<LanguageVersion>,
    pub declarations: DeclarationOptions,
}

impl ResolvedOptions {
    /// Override the parse options a tree was serialized with.
    pub fn apply(&self, options: &mut ParseOptions) {
        if let Some(kind) = self.kind {
            options.kind = kind;
        }
        if let Some(version) = self.language_version {
            options.language_version = version;
        }
    }
}

/// Flags win over the config file; a submission is always a script.
pub fn resolve_options(args: &CliArgs, config: Option<&CszConfig>) -> Result<ResolvedOptions> {
    let config = config.cloned().unwrap_or_default();

    let is_submission = args.submission || config.submission.unwrap_or(false);
    let is_script = is_submission || args.script || config.script.unwrap_or(false);

    let language_version = match (args.lang_version, config.language_version.as_deref()) {
        (Some(version), _) => Some(version),
        (None, Some(text)) => Some(
            text.parse::<LanguageVersion>()
                .with_context(|| format!("invalid languageVersion in config: {text}"))?,
        ),
        (None, None) => None,
    };

    let mut declarations = DeclarationOptions {
        is_submission,
        ..DeclarationOptions::default()
    };
    if let Some(name) = args
        .script_class_name
        .clone()
        .or(config.script_class_name)
    {
        declarations.script_class_name = name;
    }

    Ok(ResolvedOptions {
        kind: is_script.then_some(SourceCodeKind::Script),
        language_version,
        declarations,
    })
}

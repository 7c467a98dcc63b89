//! Codec option loading
//!
//! Layers, lowest priority first: built-in defaults, an optional config file
//! (YAML, TOML or JSON by extension), `CODEC_*` environment variables, then
//! command-line overrides.

use std::path::Path;

use anyhow::{bail, Context, Result};
use byte_codec::{CodecOptions, Endianness, TextEncoding};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::Serialize;
use tracing::debug;

/// Environment variable prefix, e.g. `CODEC_ENDIANNESS=CDAB`
pub const ENV_PREFIX: &str = "CODEC_";

/// Command-line overrides; unset fields leave lower layers untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endianness: Option<Endianness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_16: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<TextEncoding>,
}

fn file_layer(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .context("Config file must have an extension")?;

    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => bail!("Unsupported config file format: {}", extension),
    };
    Ok(figment)
}

/// Build the figment for the given file and overrides
pub fn figment(path: Option<&Path>, overrides: &Overrides) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(CodecOptions::default()));

    if let Some(path) = path {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        figment = file_layer(figment, path)?;
    }

    Ok(figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides)))
}

/// Resolve the effective codec options
pub fn load_options(path: Option<&Path>, overrides: &Overrides) -> Result<CodecOptions> {
    let options: CodecOptions = figment(path, overrides)?
        .extract()
        .context("Failed to load codec configuration")?;

    debug!(
        endianness = %options.endianness,
        reverse_16 = options.reverse_16,
        encoding = %options.encoding,
        "codec options resolved"
    );
    Ok(options)
}

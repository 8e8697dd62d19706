//! Embedded template assets.
//!
//! The header template is a fixed external asset, not generated code. The
//! default ships embedded in the binary; `--template` points the emitter at
//! a filesystem override instead.

use rust_embed::RustEmbed;

use crate::error::EmitError;

/// Embedded header templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.tera"]
struct EmbeddedTemplates;

/// Name of the default header template asset.
pub const DEFAULT_TEMPLATE: &str = "icon.h.tera";

/// Read the embedded default header template.
pub fn default_template() -> Result<String, EmitError> {
    let file = EmbeddedTemplates::get(DEFAULT_TEMPLATE)
        .ok_or_else(|| EmitError::TemplateNotFound(DEFAULT_TEMPLATE.to_string()))?;
    Ok(String::from_utf8_lossy(file.data.as_ref()).into_owned())
}

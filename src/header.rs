//! Header emission: template rendering and atomic output.

use std::io::Write;
use std::path::Path;

use icon_pack::{render_array, IconArtifact};
use tera::{Context, Tera};

use crate::assets;
use crate::error::EmitError;

const TEMPLATE_NAME: &str = "icon.h";

/// Check that a symbol is a valid C identifier.
///
/// # Errors
///
/// Returns [`EmitError::InvalidSymbol`] if the name is empty, starts with a
/// digit, or contains anything other than ASCII alphanumerics and `_`.
pub fn validate_symbol(symbol: &str) -> Result<(), EmitError> {
    let mut chars = symbol.chars();
    let valid = match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(EmitError::InvalidSymbol(symbol.to_string()))
    }
}

/// Include-guard token for a symbol: the uppercased name plus `_H`.
fn guard_token(symbol: &str) -> String {
    format!("{}_H", symbol.to_ascii_uppercase())
}

/// Renders the header template and writes the result atomically.
pub struct HeaderEmitter {
    template: String,
}

impl HeaderEmitter {
    /// Use the embedded default template.
    pub fn new() -> Result<Self, EmitError> {
        Ok(Self {
            template: assets::default_template()?,
        })
    }

    /// Load a template override from disk.
    pub fn from_path(path: &Path) -> Result<Self, EmitError> {
        let template = std::fs::read_to_string(path)
            .map_err(|_| EmitError::TemplateNotFound(path.display().to_string()))?;
        Ok(Self { template })
    }

    /// Render the header text for an artifact.
    ///
    /// Substitution points: the include-guard token, the symbol name, the
    /// width and height as decimal integers, and the packed array body.
    pub fn render(&self, artifact: &IconArtifact) -> Result<String, EmitError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, &self.template)?;

        let mut context = Context::new();
        context.insert("guard", &guard_token(artifact.symbol()));
        context.insert("name", artifact.symbol());
        context.insert("width", &artifact.width());
        context.insert("height", &artifact.height());
        context.insert("data", &render_array(artifact.bytes()));

        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Render the header and write it to `output`.
    ///
    /// The text is written to a temporary file in the destination directory
    /// and persisted into place, so a failure at any point leaves no
    /// partially written header behind. An existing file is only replaced
    /// when `force` is set.
    pub fn emit(&self, artifact: &IconArtifact, output: &Path, force: bool) -> Result<(), EmitError> {
        if output.exists() && !force {
            return Err(EmitError::OutputExists(output.display().to_string()));
        }

        let text = self.render(artifact)?;

        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(output).map_err(|e| EmitError::Io(e.error))?;

        tracing::info!(path = %output.display(), bytes = text.len(), "Wrote header");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_artifact() -> IconArtifact {
        IconArtifact::new("battery_low", 4, 2, vec![0xe4, 0x1b])
    }

    #[test]
    fn test_validate_symbol_accepts_identifiers() {
        for symbol in ["wifi", "_private", "icon_32", "X"] {
            validate_symbol(symbol).unwrap_or_else(|e| panic!("{symbol} rejected: {e}"));
        }
    }

    #[test]
    fn test_validate_symbol_rejects_non_identifiers() {
        for symbol in ["", "9lives", "has space", "dash-ed", "naïve"] {
            assert!(
                matches!(validate_symbol(symbol), Err(EmitError::InvalidSymbol(_))),
                "{symbol:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_guard_token_uppercases() {
        assert_eq!(guard_token("battery_low"), "BATTERY_LOW_H");
    }

    #[test]
    fn test_render_substitutes_every_point() {
        let emitter = HeaderEmitter::new().unwrap();
        let text = emitter.render(&sample_artifact()).unwrap();

        assert!(text.contains("#ifndef BATTERY_LOW_H"));
        assert!(text.contains("#define BATTERY_LOW_H"));
        assert!(text.contains("battery_low_width = 4"));
        assert!(text.contains("battery_low_height = 2"));
        assert!(text.contains("battery_low_data[] = { 0xe4, 0x1b };"));
        assert!(!text.contains("{{"), "unsubstituted template tokens left behind");
    }

    #[test]
    fn test_render_empty_array_is_still_valid() {
        let emitter = HeaderEmitter::new().unwrap();
        let artifact = IconArtifact::new("nothing", 0, 0, Vec::new());
        let text = emitter.render(&artifact).unwrap();
        assert!(text.contains("nothing_data[] = {  };"));
    }

    #[test]
    fn test_emit_writes_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("battery_low.h");
        let emitter = HeaderEmitter::new().unwrap();

        emitter.emit(&sample_artifact(), &output, false).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, emitter.render(&sample_artifact()).unwrap());
    }

    #[test]
    fn test_emit_refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("battery_low.h");
        std::fs::write(&output, "/* existing */").unwrap();
        let emitter = HeaderEmitter::new().unwrap();

        let result = emitter.emit(&sample_artifact(), &output, false);
        assert!(matches!(result, Err(EmitError::OutputExists(_))));
        // Existing content untouched
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "/* existing */");
    }

    #[test]
    fn test_emit_overwrites_with_force() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("battery_low.h");
        std::fs::write(&output, "/* existing */").unwrap();
        let emitter = HeaderEmitter::new().unwrap();

        emitter.emit(&sample_artifact(), &output, true).unwrap();
        assert!(std::fs::read_to_string(&output).unwrap().contains("0xe4"));
    }

    #[test]
    fn test_emit_leaves_no_temp_files_behind() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("battery_low.h");
        let emitter = HeaderEmitter::new().unwrap();
        emitter.emit(&sample_artifact(), &output, false).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["battery_low.h"]);
    }

    #[test]
    fn test_template_override_from_path() {
        let dir = tempdir().unwrap();
        let template_path = dir.path().join("minimal.tera");
        std::fs::write(&template_path, "{{ name }}:{{ width }}x{{ height }}").unwrap();

        let emitter = HeaderEmitter::from_path(&template_path).unwrap();
        let text = emitter.render(&sample_artifact()).unwrap();
        assert_eq!(text, "battery_low:4x2");
    }

    #[test]
    fn test_missing_template_override() {
        let result = HeaderEmitter::from_path(Path::new("no_such_template.tera"));
        assert!(matches!(result, Err(EmitError::TemplateNotFound(_))));
    }
}

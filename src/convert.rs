//! End-to-end conversion: source -> raster -> packed bytes -> header.

use std::path::PathBuf;

use icon_pack::{pack, IconArtifact};

use crate::error::{ConvertError, SourceError};
use crate::header::{self, HeaderEmitter};
use crate::source::{IconSource, PngSource, SvgSource, Transparency};

/// Options for one conversion run.
#[derive(Debug)]
pub struct ConvertOptions {
    /// Output symbol name (must be a valid C identifier).
    pub symbol: String,
    /// Input image path (`.png` or `.svg`).
    pub input: PathBuf,
    /// Transparency color, required for PNG input. Ignored for SVG.
    pub transparency: Option<Transparency>,
    /// Rasterization width, required for SVG input.
    pub width: Option<u32>,
    /// Rasterization height, required for SVG input.
    pub height: Option<u32>,
    /// Output header path. Defaults to `<symbol>.h`.
    pub output: Option<PathBuf>,
    /// External template overriding the embedded default.
    pub template: Option<PathBuf>,
    /// Overwrite an existing output file.
    pub force: bool,
}

impl ConvertOptions {
    /// The header path this conversion writes to.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.h", self.symbol)))
    }
}

/// Build the source adapter for an input path, enforcing the per-format
/// argument contract before any image work starts.
fn select_source(opts: &ConvertOptions) -> Result<Box<dyn IconSource>, SourceError> {
    let extension = opts
        .input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => {
            let transparency = opts
                .transparency
                .ok_or(SourceError::MissingTransparency)?;
            Ok(Box::new(PngSource::new(&opts.input, transparency)))
        }
        Some("svg") => {
            let (width, height) = opts
                .width
                .zip(opts.height)
                .ok_or(SourceError::MissingDimensions)?;
            Ok(Box::new(SvgSource::new(&opts.input, width, height)?))
        }
        _ => Err(SourceError::UnsupportedFormat {
            path: opts.input.display().to_string(),
        }),
    }
}

/// Run one conversion and write the output header.
///
/// Argument validation happens up front; nothing is written on any failure
/// path. Returns the artifact so callers can report what was produced.
pub fn convert(opts: &ConvertOptions) -> Result<IconArtifact, ConvertError> {
    header::validate_symbol(&opts.symbol)?;

    let source = select_source(opts)?;
    let convention = source.convention();
    let raster = source.quantize()?;

    tracing::debug!(
        convention = convention.name(),
        pixels = raster.pixels().len(),
        "Packing raster"
    );
    let bytes = pack(raster.pixels(), &convention.table())?;
    let artifact = IconArtifact::new(
        opts.symbol.clone(),
        raster.width(),
        raster.height(),
        bytes,
    );

    let emitter = match &opts.template {
        Some(path) => HeaderEmitter::from_path(path)?,
        None => HeaderEmitter::new()?,
    };
    emitter.emit(&artifact, &opts.output_path(), opts.force)?;

    Ok(artifact)
}

use thiserror::Error;

/// Errors raised while turning an input file into a quantized raster.
///
/// The argument-contract variants (unsupported format, missing
/// transparency/dimensions) are caught at the boundary before the core is
/// invoked.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported input format: {path} (expected .png or .svg)")]
    UnsupportedFormat { path: String },

    #[error("PNG input requires a transparency color (black or white)")]
    MissingTransparency,

    #[error("unknown transparency color {0:?} (expected black or white)")]
    UnknownTransparency(String),

    #[error("SVG input requires --width and --height")]
    MissingDimensions,

    #[error("invalid dimensions {width}x{height} (both must be positive)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("failed to allocate pixmap")]
    PixmapAllocation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while rendering and writing the output header.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("invalid symbol name {0:?} (must be a valid C identifier)")]
    InvalidSymbol(String),

    #[error("output file {0} already exists (pass --force to overwrite)")]
    OutputExists(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for one conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("packing error: {0}")]
    Pack(#[from] icon_pack::PackError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

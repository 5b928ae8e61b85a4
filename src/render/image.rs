// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Image file output. The format follows the destination's extension.

use std::io::Write;
use std::path::Path;

use resvg::tiny_skia::{Pixmap, Transform};
use tempfile::NamedTempFile;

use super::{RenderConfig, Scene};
use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            _ => Err(RenderError::UnsupportedFormat(extension)),
        }
    }
}

/// Rasterize an SVG document to PNG bytes.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>, RenderError> {
    let mut options = resvg::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = resvg::usvg::Tree::from_str(svg, &options)
        .map_err(|err| RenderError::Raster(format!("failed to parse generated SVG: {err}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        RenderError::Raster(format!(
            "failed to allocate {}x{} surface",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| RenderError::Raster(format!("failed to encode PNG: {err}")))
}

/// Encode `scene` for `path` and write it in one step.
///
/// The image is written to a temporary file next to `path` and renamed over
/// it, so a failed run never leaves a truncated image behind.
pub fn write_image(scene: &Scene, path: &Path, config: &RenderConfig) -> Result<(), RenderError> {
    let format = ImageFormat::from_path(path)?;
    let svg = scene.to_svg(config);
    let bytes = match format {
        ImageFormat::Svg => svg.into_bytes(),
        ImageFormat::Png => svg_to_png(&svg)?,
    };

    let io_error = |source: std::io::Error| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(&bytes).map_err(io_error)?;
    file.persist(path).map_err(|err| io_error(err.error))?;

    log::info!(
        "[PASS] Wrote {:?} image ({} bytes) to {}",
        format,
        bytes.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ImageFormat::from_path(Path::new("out/plot.svg")).unwrap(),
            ImageFormat::Svg
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("plot.PNG")).unwrap(),
            ImageFormat::Png
        );
        assert!(matches!(
            ImageFormat::from_path(Path::new("plot.gif")),
            Err(RenderError::UnsupportedFormat(ext)) if ext == "gif"
        ));
        assert!(ImageFormat::from_path(Path::new("plot")).is_err());
    }
}

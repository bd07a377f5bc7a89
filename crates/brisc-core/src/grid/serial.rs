//! Text serialization for PixelGrid
//!
//! # Format
//!
//! ```text
//! PixelGrid Version 1
//! w = W, h = H
//! <H lines of W whitespace-separated integers>
//! ```
//!
//! Blank lines and lines starting with `#` are ignored, so fixture files
//! may carry a short description.

use crate::error::{Error, Result};
use crate::grid::PixelGrid;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// PixelGrid format version
const GRID_VERSION: i32 = 1;

/// Maximum pixel count accepted when decoding (2^28)
const MAX_GRID_PIXELS: u64 = 1 << 28;

/// Maximum input size in bytes.
const MAX_INPUT_SIZE: u64 = 500_000_000;

impl PixelGrid {
    /// Read a grid from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> Result<Self> {
        let mut buf = String::new();
        reader.take(MAX_INPUT_SIZE + 1).read_to_string(&mut buf)?;
        if buf.len() as u64 > MAX_INPUT_SIZE {
            return Err(Error::DecodeError(format!(
                "input too large: exceeds maximum allowed size of {MAX_INPUT_SIZE} bytes"
            )));
        }
        Self::read_from_str(&buf)
    }

    /// Read a grid from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::read_from_reader(&mut BufReader::new(file))
    }

    /// Read a grid from its text form.
    pub fn read_from_str(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));

        let version_line = lines
            .next()
            .ok_or_else(|| Error::DecodeError("missing PixelGrid header".into()))?;
        let version: i32 = version_line
            .strip_prefix("PixelGrid Version ")
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| Error::DecodeError(format!("invalid header: {version_line:?}")))?;
        if version != GRID_VERSION {
            return Err(Error::DecodeError(format!(
                "unsupported PixelGrid version {version}"
            )));
        }

        let size_line = lines
            .next()
            .ok_or_else(|| Error::DecodeError("missing size line".into()))?;
        let (width, height) = parse_size_line(size_line)?;
        if width as u64 * height as u64 > MAX_GRID_PIXELS {
            return Err(Error::DecodeError(format!(
                "PixelGrid too large: {width}x{height} exceeds maximum {MAX_GRID_PIXELS} pixels"
            )));
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for (y, line) in lines.by_ref().take(height as usize).enumerate() {
            let start = data.len();
            for token in line.split_whitespace() {
                let value = token.parse::<i32>().map_err(|_| {
                    Error::DecodeError(format!("row {y}: invalid gray level {token:?}"))
                })?;
                data.push(value);
            }
            if data.len() - start != width as usize {
                return Err(Error::DecodeError(format!(
                    "row {y}: expected {width} values, got {}",
                    data.len() - start
                )));
            }
        }
        if lines.next().is_some() {
            return Err(Error::DecodeError(format!(
                "more than {height} rows of pixel data"
            )));
        }

        PixelGrid::from_data(width, height, data)
    }

    /// Write a grid to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "PixelGrid Version {GRID_VERSION}")?;
        writeln!(writer, "w = {}, h = {}", self.width, self.height)?;
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(i32::to_string).collect();
            writeln!(writer, "{}", line.join(" "))?;
        }
        Ok(())
    }

    /// Write a grid to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a grid to a string.
    pub fn write_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::DecodeError(e.to_string()))
    }
}

/// Parse `w = W, h = H`
fn parse_size_line(line: &str) -> Result<(u32, u32)> {
    let mut width = None;
    let mut height = None;
    for field in line.split(',') {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| Error::DecodeError(format!("invalid size line: {line:?}")))?;
        let value: u32 = value
            .trim()
            .parse()
            .map_err(|_| Error::DecodeError(format!("invalid size line: {line:?}")))?;
        match key.trim() {
            "w" => width = Some(value),
            "h" => height = Some(value),
            _ => {}
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(Error::DecodeError(format!("invalid size line: {line:?}"))),
    }
}

//! Row table loader: JSON rows named after the spreadsheet columns, folded into image groups.
//!
//! ```json
//! [
//!   {"Group": 1, "File": "img/a.png", "Text": "Hello", "Fonttype": "fonts/a.ttf",
//!    "Fontsize": 32, "Color": "#000000", "Border": 2, "Bordercolor": "#ff0000",
//!    "X": 10, "Y": 20, "CenterX": true, "CenterY": false}
//! ]
//! ```
//!
//! Every row is validated on its own. A bad row is reported and skipped, never fatal for the
//! rest of the table.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::foundation::core::{Centering, Location, Rgb8};
use crate::foundation::error::{BannerError, BannerResult};
use crate::foundation::report::Diagnostics;
use crate::model::{ImageGroup, TextItem, TextItemDef};

/// A cell holding text or a number; numbers are stringified as written.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellText {
    Str(String),
    Num(serde_json::Number),
}

impl fmt::Display for CellText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

/// A yes/no cell: a boolean, `0`/`1`, or a word such as `"true"` or `"no"`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlagCell {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl FlagCell {
    pub fn to_bool(&self) -> BannerResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Num(n) if *n == 0.0 => Ok(false),
            Self::Num(n) if *n == 1.0 => Ok(true),
            Self::Num(n) => Err(BannerError::validation(format!(
                "flag must be 0 or 1, got {n}"
            ))),
            Self::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" | "n" => Ok(false),
                "1" | "true" | "yes" | "y" => Ok(true),
                other => Err(BannerError::validation(format!(
                    "flag must be true/false, got \"{other}\""
                ))),
            },
        }
    }
}

/// One configuration row. Column names match the spreadsheet headers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConfigRow {
    #[serde(rename = "Group")]
    pub group: CellText,
    #[serde(rename = "File")]
    pub file: String,
    #[serde(rename = "Text")]
    pub text: CellText,
    #[serde(rename = "Fonttype")]
    pub font: String,
    #[serde(rename = "Fontsize")]
    pub font_size: f64,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Border", default)]
    pub border: Option<f64>,
    #[serde(rename = "Bordercolor", default)]
    pub border_color: Option<String>,
    #[serde(rename = "X", default)]
    pub x: Option<f64>,
    #[serde(rename = "Y", default)]
    pub y: Option<f64>,
    #[serde(rename = "CenterX", default)]
    pub center_x: Option<FlagCell>,
    #[serde(rename = "CenterY", default)]
    pub center_y: Option<FlagCell>,
}

/// A skipped row and why.
#[derive(Debug)]
pub struct RejectedRow {
    /// 0-based row index in the table.
    pub row: usize,
    pub error: BannerError,
}

/// Groups in first-appearance order plus every rejected row.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub groups: Vec<ImageGroup>,
    pub rejected: Vec<RejectedRow>,
}

impl LoadedConfig {
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Read and validate the table at `path`. Relative `File`/`Fonttype` paths resolve against the
/// directory containing `path`.
#[tracing::instrument(skip(diagnostics))]
pub fn load_config(path: &Path, diagnostics: &mut dyn Diagnostics) -> BannerResult<LoadedConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    parse_config(&json, root, diagnostics)
}

/// Parse a JSON row table. Only a malformed document is an error; bad rows are collected.
pub fn parse_config(
    json: &str,
    root: &Path,
    diagnostics: &mut dyn Diagnostics,
) -> BannerResult<LoadedConfig> {
    let doc: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| BannerError::serde(format!("parse config JSON: {e}")))?;
    let serde_json::Value::Array(rows) = doc else {
        return Err(BannerError::serde("config must be a JSON array of rows"));
    };
    Ok(group_rows(rows, root, diagnostics))
}

/// Fold raw rows into groups, keeping the valid ones and reporting the rest.
pub fn group_rows(
    rows: Vec<serde_json::Value>,
    root: &Path,
    diagnostics: &mut dyn Diagnostics,
) -> LoadedConfig {
    let mut out = LoadedConfig::default();
    let mut index_by_group: HashMap<String, usize> = HashMap::new();

    for (row, value) in rows.into_iter().enumerate() {
        let accepted = serde_json::from_value::<ConfigRow>(value)
            .map_err(|e| BannerError::serde(format!("row {row}: {e}")))
            .and_then(|r| validate_row(&r, root))
            .and_then(|(group, file, item)| match index_by_group.get(&group) {
                Some(&idx) if out.groups[idx].base_image != file => {
                    Err(BannerError::validation(format!(
                        "invalid group '{group}': all rows of a group must use the same File, \
                         expected '{}', found '{}'",
                        out.groups[idx].base_image.display(),
                        file.display()
                    )))
                }
                Some(&idx) => {
                    out.groups[idx].push(item);
                    Ok(())
                }
                None => {
                    let mut g = ImageGroup::new(group.clone(), file);
                    g.push(item);
                    index_by_group.insert(group, out.groups.len());
                    out.groups.push(g);
                    Ok(())
                }
            });

        if let Err(error) = accepted {
            diagnostics.row_rejected(row, &error);
            out.rejected.push(RejectedRow { row, error });
        }
    }

    out
}

/// Validate one row into `(group key, base image path, item)`.
pub fn validate_row(row: &ConfigRow, root: &Path) -> BannerResult<(String, PathBuf, TextItem)> {
    let group = row.group.to_string();
    let file = check_file(root, &row.file)?;
    let font_path = check_file(root, &row.font)?;

    let color = Rgb8::from_hex(&row.color)?;
    let border_width = row.border.unwrap_or(0.0);
    let border_color = if border_width > 0.0 {
        let hex = row
            .border_color
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(BannerError::InvalidBorderConfig)?;
        Some(Rgb8::from_hex(hex)?)
    } else {
        None
    };

    let centering = Centering::new(
        flag(row.center_x.as_ref())?,
        flag(row.center_y.as_ref())?,
    );

    let item = TextItem::new(TextItemDef {
        text: row.text.to_string(),
        font_path,
        font_size: font_size_px(row.font_size)?,
        color,
        border_width,
        border_color,
        location: Location::new(coord(row.x, "X")?, coord(row.y, "Y")?),
        centering,
    })?;

    Ok((group, file, item))
}

fn check_file(root: &Path, name: &str) -> BannerResult<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BannerError::validation("file path must be non-empty"));
    }
    let path = root.join(name);
    if !path.is_file() {
        return Err(BannerError::missing(path));
    }
    Ok(path)
}

fn flag(cell: Option<&FlagCell>) -> BannerResult<bool> {
    cell.map_or(Ok(false), FlagCell::to_bool)
}

fn font_size_px(v: f64) -> BannerResult<u32> {
    if !v.is_finite() || v < 1.0 || v.fract() != 0.0 || v > f64::from(u32::MAX) {
        return Err(BannerError::validation(format!(
            "Fontsize must be a positive integer, got {v}"
        )));
    }
    Ok(v as u32)
}

fn coord(v: Option<f64>, column: &str) -> BannerResult<i32> {
    let v = v.unwrap_or(0.0);
    if !v.is_finite() || v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
        return Err(BannerError::validation(format!(
            "{column} must be a finite pixel coordinate, got {v}"
        )));
    }
    Ok(v.round() as i32)
}

#[cfg(test)]
#[path = "../../tests/unit/config/table.rs"]
mod tests;

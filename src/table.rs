// src/table.rs
//
// CSV plumbing for the command line: attribute tables and layouts in,
// colors, legends and glyph records out.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::color::Color;
use crate::colorizer::LegendEntry;
use crate::glyph::{EdgeGlyph, Glyph};
use crate::progress::count_progress_bar;
use crate::value::AttrValue;

/// Attribute columns with one row of values per record.
#[derive(Debug, Clone, PartialEq)]
struct Columns {
    names: Vec<String>,
    rows: Vec<Vec<AttrValue>>,
}

impl Columns {
    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|c| c == name)
    }

    fn values(&self, name: &str) -> io::Result<Vec<AttrValue>> {
        let index = self.names.iter().position(|c| c == name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "attribute '{}' not found; available: {}",
                    name,
                    self.names.join(", ")
                ),
            )
        })?;
        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }
}

/// Parse CSV with a header row. `keys` name the columns that identify a
/// record; each must exist and be non-empty on every row. Short rows leave
/// their trailing attributes `Absent`.
fn read_keyed<R: Read>(reader: R, keys: &[&str]) -> io::Result<(Vec<Vec<String>>, Columns)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let key_indices = keys
        .iter()
        .map(|key| {
            headers.iter().position(|h| h.trim() == *key).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("column '{}' not found in header", key),
                )
            })
        })
        .collect::<io::Result<Vec<usize>>>()?;
    let attribute_indices: Vec<usize> = (0..headers.len())
        .filter(|i| !key_indices.contains(i))
        .collect();
    let names: Vec<String> = attribute_indices
        .iter()
        .map(|&i| headers[i].trim().to_string())
        .collect();

    let pb = count_progress_bar("table", "rows", None);
    let mut record_keys = Vec::new();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row_keys = Vec::with_capacity(key_indices.len());
        for (&index, key) in key_indices.iter().zip(keys) {
            let value = record.get(index).unwrap_or("").trim();
            if value.is_empty() {
                pb.finish_and_clear();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("row {} has an empty '{}'", record_keys.len() + 1, key),
                ));
            }
            row_keys.push(value.to_string());
        }
        let row: Vec<AttrValue> = attribute_indices
            .iter()
            .map(|&i| record.get(i).map_or(AttrValue::Absent, AttrValue::parse_cell))
            .collect();
        record_keys.push(row_keys);
        rows.push(row);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok((record_keys, Columns { names, rows }))
}

/// Rows of attribute values keyed by an id column.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeTable {
    ids: Vec<String>,
    columns: Columns,
}

impl AttributeTable {
    pub fn read_csv<P: AsRef<Path>>(path: P, id_column: &str) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file), id_column)?;
        eprintln!(
            "[table] Read {} rows with {} attribute columns from {}",
            table.len(),
            table.columns().len(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R, id_column: &str) -> io::Result<Self> {
        let (keys, columns) = read_keyed(reader, &[id_column])?;
        let ids = keys.into_iter().flatten().collect();
        Ok(AttributeTable { ids, columns })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Attribute column names, without the id column.
    pub fn columns(&self) -> &[String] {
        &self.columns.names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Values of one attribute, aligned with [`AttributeTable::ids`].
    pub fn column(&self, name: &str) -> io::Result<Vec<AttrValue>> {
        self.columns.values(name)
    }
}

/// Edge rows: a source and target node id plus attribute columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTable {
    ends: Vec<(String, String)>,
    columns: Columns,
}

impl EdgeTable {
    pub fn read_csv<P: AsRef<Path>>(
        path: P,
        source_column: &str,
        target_column: &str,
    ) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file), source_column, target_column)?;
        eprintln!(
            "[table] Read {} edges with {} attribute columns from {}",
            table.len(),
            table.columns().len(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        source_column: &str,
        target_column: &str,
    ) -> io::Result<Self> {
        let (keys, columns) = read_keyed(reader, &[source_column, target_column])?;
        let ends = keys
            .into_iter()
            .filter_map(|pair| match <[String; 2]>::try_from(pair) {
                Ok([source, target]) => Some((source, target)),
                Err(_) => None,
            })
            .collect();
        Ok(EdgeTable { ends, columns })
    }

    /// `(source, target)` per row.
    pub fn ends(&self) -> &[(String, String)] {
        &self.ends
    }

    pub fn columns(&self) -> &[String] {
        &self.columns.names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Values of one attribute, aligned with [`EdgeTable::ends`].
    pub fn column(&self, name: &str) -> io::Result<Vec<AttrValue>> {
        self.columns.values(name)
    }
}

/// Read `id,x,y` rows into a position per id.
pub fn read_layout_csv<P: AsRef<Path>>(path: P) -> io::Result<HashMap<String, (f32, f32)>> {
    let file = File::open(path.as_ref())?;
    read_layout(BufReader::new(file))
}

pub fn read_layout<R: Read>(reader: R) -> io::Result<HashMap<String, (f32, f32)>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut layout = HashMap::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let id = layout_field(&record, 0, line)?.to_string();
        let x = parse_coord(layout_field(&record, 1, line)?, line)?;
        let y = parse_coord(layout_field(&record, 2, line)?, line)?;
        if layout.contains_key(&id) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("layout row {}: duplicate id '{}'", line + 1, id),
            ));
        }
        layout.insert(id, (x, y));
    }
    Ok(layout)
}

fn layout_field(record: &StringRecord, i: usize, line: usize) -> io::Result<&str> {
    record.get(i).map(str::trim).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("layout row {} has fewer than 3 fields", line + 1),
        )
    })
}

fn parse_coord(s: &str, line: usize) -> io::Result<f32> {
    s.parse::<f32>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("layout row {}: bad coordinate '{}': {}", line + 1, s, e),
        )
    })
}

pub fn write_colors_csv<P: AsRef<Path>>(path: P, ids: &[String], colors: &[Color]) -> io::Result<()> {
    if ids.len() != colors.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} ids but {} colors", ids.len(), colors.len()),
        ));
    }
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    writer.write_record(["id", "color"])?;
    for (id, color) in ids.iter().zip(colors) {
        writer.write_record([id.as_str(), color.to_hex().as_str()])?;
    }
    writer.flush()
}

pub fn write_legend_csv<P: AsRef<Path>>(path: P, legend: &[LegendEntry]) -> io::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    writer.write_record(["label", "color"])?;
    for entry in legend {
        writer.write_record([entry.label.as_str(), entry.color.to_hex().as_str()])?;
    }
    writer.flush()
}

pub fn write_glyphs_csv<P: AsRef<Path>>(path: P, glyphs: &[Glyph]) -> io::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    writer.write_record(["id", "x", "y", "color", "size", "alpha"])?;
    for g in glyphs {
        writer.write_record(&[
            g.id.clone(),
            g.x.to_string(),
            g.y.to_string(),
            g.color.to_hex(),
            g.size.to_string(),
            g.alpha.to_string(),
        ])?;
    }
    writer.flush()
}

pub fn write_edges_csv<P: AsRef<Path>>(path: P, edges: &[EdgeGlyph]) -> io::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    writer.write_record(["source", "target", "x0", "y0", "x1", "y1", "color", "width", "alpha"])?;
    for e in edges {
        writer.write_record(&[
            e.source.clone(),
            e.target.clone(),
            e.x0.to_string(),
            e.y0.to_string(),
            e.x1.to_string(),
            e.y1.to_string(),
            e.color.to_hex(),
            e.width.to_string(),
            e.alpha.to_string(),
        ])?;
    }
    writer.flush()
}

//! Listing output: aligned table, JSON or CSV on stdout

use anyhow::Result;
use clap::ValueEnum;
use serde_json::{Map, Value};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Rows of text under fixed headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn print(&self, format: OutputFormat) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match format {
            OutputFormat::Table => self.write_table(&mut out)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &self.to_json())?;
                writeln!(out)?;
            }
            OutputFormat::Csv => self.write_csv(&mut out)?,
        }
        Ok(())
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn write_table(&self, out: &mut impl Write) -> Result<()> {
        let widths = self.widths();
        let line = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{}{}", c, " ".repeat(w.saturating_sub(c.chars().count()))))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        writeln!(out, "{}", line(self.headers.clone()))?;
        writeln!(out, "{}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)))?;
        for row in &self.rows {
            writeln!(out, "{}", line(row.iter().map(String::as_str).collect()))?;
        }
        Ok(())
    }

    pub fn write_csv(&self, out: &mut impl Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.rows
                .iter()
                .map(|row| {
                    let object: Map<String, Value> = self
                        .headers
                        .iter()
                        .zip(row)
                        .map(|(h, c)| (json_key(h), Value::String(c.clone())))
                        .collect();
                    Value::Object(object)
                })
                .collect(),
        )
    }
}

/// "Voter ID" -> "voter_id"
fn json_key(header: &str) -> String {
    header
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(&["#", "Voter ID", "Name"]);
        table.row(vec!["1".to_string(), "1021".to_string(), "Asha K".to_string()]);
        table.row(vec!["2".to_string(), "2210".to_string(), "Ravi, S".to_string()]);
        table
    }

    #[test]
    fn test_table_alignment() {
        let mut out = Vec::new();
        sample().write_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#  Voter ID  Name");
        assert_eq!(lines[2], "1  1021      Asha K");
    }

    #[test]
    fn test_csv_quotes() {
        let mut out = Vec::new();
        sample().write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("#,Voter ID,Name\n"));
        assert!(text.contains("\"Ravi, S\""));
    }

    #[test]
    fn test_json_keys() {
        let json = sample().to_json();
        assert_eq!(json[0]["voter_id"], "1021");
        assert_eq!(json[1]["name"], "Ravi, S");
    }
}

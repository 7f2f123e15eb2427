use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use knapsack_rs::entities::{Item, Profit};
use log::info;

const HEADER: &str = "number,weight,value";

/// Writes a 1-indexed listing of the items to `path`, overwriting any existing file
pub fn write_appendix(items: &[Item], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create appendix file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{HEADER}")?;
    for (i, item) in items.iter().enumerate() {
        writeln!(writer, "{},{},{}", i + 1, item.weight, item.value)?;
    }
    writer.flush()?;

    info!(
        "[IO] appendix with {} items written to {}",
        items.len(),
        path.display()
    );
    Ok(())
}

/// Reads back the items of an appendix file written by [`write_appendix`]
pub fn read_appendix(path: &Path) -> Result<Vec<Item>> {
    let file = File::open(path)
        .with_context(|| format!("could not open appendix file: {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let Some(header) = lines.next() else {
        bail!("appendix file is empty: {}", path.display());
    };
    ensure!(header?.trim() == HEADER, "unexpected appendix header");

    let mut items = vec![];
    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let item = parse_row(&line, i + 1)
            .with_context(|| format!("malformed appendix row {}: {line:?}", i + 1))?;
        items.push(item);
    }
    Ok(items)
}

fn parse_row(line: &str, expected_number: usize) -> Result<Item> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    ensure!(fields.len() == 3, "expected 3 fields, found {}", fields.len());

    let number: usize = fields[0].parse()?;
    ensure!(
        number == expected_number,
        "expected item number {expected_number}, found {number}"
    );
    let weight: u64 = fields[1].parse()?;
    let value: f64 = fields[2].parse()?;
    ensure!(value.is_finite() && value >= 0.0, "invalid value {value}");
    let value = Profit::from_f64(value);
    ensure!(weight > 0 && value > Profit::ZERO, "weight and value must be positive");
    ensure!(value <= Item::MAX_VALUE, "value {value} exceeds {}", Item::MAX_VALUE);

    Ok(Item::from_profit(weight, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_rows_are_rejected() {
        assert!(parse_row("1,5", 1).is_err());
        assert!(parse_row("2,5,1.00", 1).is_err());
        assert!(parse_row("1,0,1.00", 1).is_err());
        assert!(parse_row("1,five,1.00", 1).is_err());
        assert!(parse_row("1,5,1e17", 1).is_err());
        assert_eq!(parse_row("1,5,1.25", 1).unwrap(), Item::new(5, 1.25));
    }
}

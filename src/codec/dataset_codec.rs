//! Line-oriented dataset files: input width, output width, then every value
//! of every row, one per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::dataset::dataset::Dataset;
use crate::error::{Error, Result};

pub fn encode<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    write_lines(dataset, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io("writing dataset", e))
}

fn write_lines<W: Write>(dataset: &Dataset, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{}", dataset.input_width())?;
    writeln!(writer, "{}", dataset.output_width())?;
    for value in dataset.rows().iter().flatten() {
        writeln!(writer, "{value}")?;
    }
    Ok(())
}

pub fn decode<R: Read>(reader: R) -> Result<Dataset> {
    let mut lines = BufReader::new(reader).lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let mut next_line = || -> Result<Option<(usize, String)>> {
        match lines.next() {
            Some((idx, Ok(line))) => Ok(Some((idx + 1, line))),
            Some((_, Err(e))) => Err(Error::io("reading dataset", e)),
            None => Ok(None),
        }
    };

    let mut width = |name: &str| -> Result<usize> {
        let (line_no, line) = next_line()?
            .ok_or_else(|| Error::codec(format!("dataset ended before the {name} width")))?;
        line.trim().parse()
            .map_err(|_| Error::codec(format!("line {line_no}: {name} width {:?} is not a count", line.trim())))
    };
    let input_width = width("input")?;
    let output_width = width("output")?;

    let mut dataset = Dataset::new(input_width, output_width)
        .map_err(|e| Error::codec(e.to_string()))?;

    let mut row = Vec::new();
    while let Some((line_no, line)) = next_line()? {
        let value: f64 = line.trim().parse()
            .map_err(|_| Error::codec(format!("line {line_no}: {:?} is not a number", line.trim())))?;
        row.push(value);
        if row.len() == dataset.row_width() {
            dataset.insert(std::mem::take(&mut row))?;
        }
    }

    if !row.is_empty() {
        return Err(Error::codec(format!(
            "dataset ends with a partial row of {} value(s), rows need {}",
            row.len(),
            dataset.row_width()
        )));
    }
    log::debug!("read {} dataset rows ({input_width} in, {output_width} out)", dataset.len());
    Ok(dataset)
}

pub fn save(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    encode(dataset, file)
}

pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("opening {}", path.display()), e))?;
    decode(file)
}

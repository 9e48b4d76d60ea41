//! Flat text record for a trained network.
//!
//! One line, five `#`-separated fields:
//!
//! ```text
//! bias # activation id # layer sizes # weight count # weights
//! 1#1#2,2,1#12#0.5,0.25,...
//! ```
//!
//! Layer sizes exclude bias units. Weights are flattened boundary first, then
//! source unit, then destination unit, and read back in the same order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::activation::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;

const FIELD_SEPARATOR: char = '#';
const VALUE_SEPARATOR: &str = ",";

/// Renders the record for `network`, without a trailing newline.
pub fn to_record(network: &Network) -> String {
    let bias = if network.has_bias() { "1" } else { "0" };
    let sizes = join(network.layer_sizes().iter());
    let weights = join(network.weights().iter().flat_map(Matrix::iter));

    format!(
        "{bias}{sep}{}{sep}{sizes}{sep}{}{sep}{weights}",
        network.activation().id(),
        network.weight_count(),
        sep = FIELD_SEPARATOR,
    )
}

/// Parses a record produced by [`to_record`]. Surrounding whitespace is ignored.
pub fn from_record(record: &str) -> Result<Network> {
    let fields: Vec<&str> = record.trim().split(FIELD_SEPARATOR).collect();
    let [bias, activation, sizes, count, weights] = fields.as_slice() else {
        return Err(Error::codec(format!(
            "expected 5 '{FIELD_SEPARATOR}'-separated fields, found {}",
            fields.len()
        )));
    };

    let bias = match bias.trim() {
        "1" => true,
        "0" => false,
        other => return Err(Error::codec(format!("bias flag must be 0 or 1, got {other:?}"))),
    };

    let activation = activation.trim().parse::<u8>().ok()
        .and_then(ActivationFunction::from_id)
        .ok_or_else(|| Error::codec(format!("unknown activation id {:?}", activation.trim())))?;

    let sizes: Vec<usize> = split_values(sizes, "layer size")?;
    if sizes.len() < 2 || sizes.contains(&0) {
        return Err(Error::codec(format!("invalid layer sizes {sizes:?}")));
    }

    let count: usize = count.trim().parse()
        .map_err(|_| Error::codec(format!("weight count {:?} is not a number", count.trim())))?;
    let values: Vec<f64> = split_values(weights, "weight")?;
    if values.len() != count {
        return Err(Error::codec(format!(
            "record declares {count} weights but carries {}",
            values.len()
        )));
    }

    let last = sizes.len() - 1;
    let (units, expected) = weight_layout(&sizes, bias)
        .ok_or_else(|| Error::codec(format!("layer sizes {sizes:?} are too large")))?;
    if count != expected {
        return Err(Error::codec(format!(
            "layer sizes {sizes:?} need {expected} weights, record declares {count}"
        )));
    }

    let mut matrices = Vec::with_capacity(last);
    let mut offset = 0;
    for pair in units.windows(2) {
        let len = pair[0] * pair[1];
        let matrix = Matrix::from_flat(pair[0], pair[1], &values[offset..offset + len])
            .ok_or_else(|| Error::codec("weight list ended early"))?;
        matrices.push(matrix);
        offset += len;
    }

    let network = Network::from_weights(&sizes, bias, activation, matrices)
        .map_err(|e| Error::codec(format!("record does not describe a valid network: {e}")))?;
    log::debug!("decoded network {sizes:?} with {count} weights");
    Ok(network)
}

/// Writes the record plus a trailing newline.
pub fn encode<W: Write>(network: &Network, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", to_record(network))
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io("writing network record", e))
}

/// Reads the whole stream and decodes one record from it.
pub fn decode<R: Read>(mut reader: R) -> Result<Network> {
    let mut record = String::new();
    reader.read_to_string(&mut record)
        .map_err(|e| Error::io("reading network record", e))?;
    if record.trim().is_empty() {
        return Err(Error::codec("network record is empty"));
    }
    from_record(&record)
}

/// Encodes `network` into a file, replacing it if present.
pub fn save(network: &Network, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    encode(network, BufWriter::new(file))?;
    log::info!("saved network to {}", path.display());
    Ok(())
}

/// Decodes a network from a file written by [`save`].
pub fn load(path: impl AsRef<Path>) -> Result<Network> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("opening {}", path.display()), e))?;
    decode(BufReader::new(file))
}

/// Unit count per layer and total weight count, or `None` on overflow.
fn weight_layout(sizes: &[usize], bias: bool) -> Option<(Vec<usize>, usize)> {
    let last = sizes.len() - 1;
    let units = sizes.iter().enumerate()
        .map(|(i, &size)| size.checked_add(usize::from(bias && i != last)))
        .collect::<Option<Vec<usize>>>()?;
    let expected = units.windows(2)
        .try_fold(0usize, |total, pair| total.checked_add(pair[0].checked_mul(pair[1])?))?;
    Some((units, expected))
}

fn join<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(VALUE_SEPARATOR)
}

fn split_values<T: std::str::FromStr>(field: &str, what: &str) -> Result<Vec<T>> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field.split(VALUE_SEPARATOR)
        .map(|raw| {
            raw.trim().parse::<T>()
                .map_err(|_| Error::codec(format!("{what} {:?} is not a number", raw.trim())))
        })
        .collect()
}

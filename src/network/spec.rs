use std::path::Path;

use rand::Rng;
use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;

use crate::activation::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::network::network::Network;

/// A serializable description of a network architecture.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of the
/// trained weights, so a topology can be kept in a config file and built
/// with fresh random weights on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Declared units per layer (input → output), bias excluded.
    pub layers: Vec<usize>,
    /// Append a bias unit to every non-output layer.
    #[serde(default = "default_bias")]
    pub bias: bool,
    pub activation: ActivationFunction,
}

fn default_bias() -> bool {
    true
}

impl NetworkSpec {
    pub fn new(layers: Vec<usize>, bias: bool, activation: ActivationFunction) -> NetworkSpec {
        NetworkSpec { layers, bias, activation }
    }

    /// Builds a network with random initial weights.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        Network::new(&self.layers, self.bias, self.activation, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        save_json(self, path.as_ref())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        load_json(path.as_ref())
    }
}

pub(crate) fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .map_err(|e| Error::config(format!("writing {}: {e}", path.display())))
}

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = std::fs::File::open(path)
        .map_err(|e| Error::io(format!("opening {}", path.display()), e))?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("reading {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        let spec = NetworkSpec::new(vec![2, 2, 1], true, ActivationFunction::Sigmoid);
        spec.save_json(&path).unwrap();
        assert_eq!(NetworkSpec::load_json(&path).unwrap(), spec);
    }

    #[test]
    fn bias_defaults_to_enabled() {
        let spec: NetworkSpec = serde_json::from_str(r#"{"layers":[1,1],"activation":"linear"}"#).unwrap();
        assert!(spec.bias);
        assert_eq!(spec.activation, ActivationFunction::Linear);
    }

    #[test]
    fn build_validates_topology() {
        let mut rng = StdRng::seed_from_u64(3);
        let spec = NetworkSpec::new(vec![4], false, ActivationFunction::Linear);
        assert!(matches!(spec.build(&mut rng), Err(Error::Configuration(_))));
    }

    #[test]
    fn missing_file_is_reported_with_cause() {
        let dir = tempfile::tempdir().unwrap();
        let err = NetworkSpec::load_json(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Codec { source: Some(_), .. }));
    }
}

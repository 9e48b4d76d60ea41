use crate::error::{Error, Result};
use crate::layers::unit::Unit;

/// Ordered layers of units: layer 0 is the input, the last one the output.
///
/// With bias enabled every layer but the output carries one extra trailing
/// bias unit on top of its declared size.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    layers: Vec<Vec<Unit>>,
    bias: bool,
}

impl Topology {
    /// Builds the layers for the given declared sizes.
    ///
    /// Fails with a configuration error if fewer than two sizes are given or
    /// any size is zero.
    pub fn new(sizes: &[usize], bias: bool) -> Result<Topology> {
        if sizes.len() < 2 {
            return Err(Error::config(format!(
                "a network needs at least an input and an output layer, got {} layer(s)",
                sizes.len()
            )));
        }
        if let Some(idx) = sizes.iter().position(|&size| size < 1) {
            return Err(Error::config(format!("layer {idx} must have at least one unit")));
        }

        let last = sizes.len() - 1;
        let layers = sizes.iter().enumerate()
            .map(|(i, &size)| {
                let mut units: Vec<Unit> = (0..size).map(|_| Unit::ordinary()).collect();
                if bias && i != last {
                    units.push(Unit::bias());
                }
                units
            })
            .collect();

        Ok(Topology { layers, bias })
    }

    pub fn has_bias(&self) -> bool {
        self.bias
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Vec<Unit>] {
        &self.layers
    }

    pub fn layer(&self, i: usize) -> &[Unit] {
        &self.layers[i]
    }

    pub(crate) fn layer_mut(&mut self, i: usize) -> &mut [Unit] {
        &mut self.layers[i]
    }

    /// Unit count of layer `i`, bias unit included.
    pub fn units(&self, i: usize) -> usize {
        self.layers[i].len()
    }

    /// Declared size of layer `i`, bias unit excluded.
    pub fn declared_size(&self, i: usize) -> usize {
        let is_output = i == self.layers.len() - 1;
        self.layers[i].len() - usize::from(self.bias && !is_output)
    }

    pub fn declared_sizes(&self) -> Vec<usize> {
        (0..self.layers.len()).map(|i| self.declared_size(i)).collect()
    }

    pub fn input_size(&self) -> usize {
        self.declared_size(0)
    }

    pub fn output_size(&self) -> usize {
        self.declared_size(self.layers.len() - 1)
    }

    /// Current values of every unit in layer `i`.
    pub fn values(&self, i: usize) -> Vec<f64> {
        self.layers[i].iter().map(Unit::value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_unit_trails_every_non_output_layer() {
        let topology = Topology::new(&[2, 3, 1], true).unwrap();
        assert_eq!(topology.depth(), 3);
        assert_eq!((topology.units(0), topology.units(1), topology.units(2)), (3, 4, 1));
        for i in 0..2 {
            let layer = topology.layer(i);
            assert!(layer.last().unwrap().is_bias());
            assert_eq!(layer.iter().filter(|u| u.is_bias()).count(), 1);
        }
        assert!(topology.layer(2).iter().all(|u| !u.is_bias()));
        assert_eq!(topology.declared_sizes(), vec![2, 3, 1]);
    }

    #[test]
    fn no_bias_keeps_declared_sizes() {
        let topology = Topology::new(&[4, 2], false).unwrap();
        assert_eq!((topology.units(0), topology.units(1)), (4, 2));
        assert_eq!((topology.input_size(), topology.output_size()), (4, 2));
    }

    #[test]
    fn rejects_single_layer() {
        assert!(matches!(Topology::new(&[3], true), Err(Error::Configuration(_))));
        assert!(matches!(Topology::new(&[], false), Err(Error::Configuration(_))));
    }

    #[test]
    fn rejects_empty_layer() {
        assert!(matches!(Topology::new(&[2, 0, 1], true), Err(Error::Configuration(_))));
    }
}

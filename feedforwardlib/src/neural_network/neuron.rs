use super::prelude::*;

/// Generic `Neuron` type with f32 float type.
pub type Neuron32 = Neuron<f32>;

/// Generic `Neuron` type with f64 float type.
pub type Neuron64 = Neuron<f64>;

#[derive(Debug, Default, Clone, PartialEq)]
/// Single neuron representation.
///
/// Neuron owns the list of its outgoing connections, ordered
/// the same way as neurons of the layers it was connected to.
/// Incoming connections are not stored: they are identified
/// by the `Connection::target` index of the source neurons.
///
/// Cloning a neuron copies all of its connections, so the clone
/// never shares any weights with the original neuron.
///
/// ```
/// use feedforwardlib::prelude::*;
///
/// let neuron = Neuron32::default();
///
/// assert!(neuron.out_connections().is_empty());
/// ```
pub struct Neuron<F: Float> {
    out_connections: Vec<Connection<F>>
}

impl<F: Float> Neuron<F> {
    #[inline]
    /// Return outgoing connections of the neuron.
    pub fn out_connections(&self) -> &[Connection<F>] {
        &self.out_connections
    }

    #[inline]
    /// Return outgoing connections of the neuron for weights update.
    ///
    /// The amount of connections can't be changed this way.
    pub fn out_connections_mut(&mut self) -> &mut [Connection<F>] {
        &mut self.out_connections
    }

    #[inline]
    /// Append new outgoing connection to the neuron with given index
    /// in the target layer.
    pub(crate) fn connect(&mut self, target: usize, weight: F) {
        self.out_connections.push(Connection::new(target, weight));
    }

    #[inline]
    /// Remove all outgoing connections of the neuron.
    pub(crate) fn disconnect(&mut self) {
        self.out_connections.clear();
    }
}

#[test]
fn test_neuron_connections() {
    let mut neuron = Neuron64::default();

    neuron.connect(0, 0.5);
    neuron.connect(1, 1.5);

    let weights = neuron.out_connections().iter()
        .map(Connection::weight)
        .collect::<Vec<_>>();

    assert_eq!(weights, [0.5, 1.5]);

    let clone = neuron.clone();

    neuron.out_connections_mut()[0].set_weight(2.0).unwrap();
    neuron.connect(2, 3.0);

    assert_eq!(clone.out_connections().len(), 2);
    assert_eq!(clone.out_connections()[0].weight(), 0.5);

    neuron.disconnect();

    assert!(neuron.out_connections().is_empty());
    assert_eq!(clone.out_connections().len(), 2);
}

use crate::prelude::*;

/// Generic `Connection` type with f32 float type.
pub type Connection32 = Connection<f32>;

/// Generic `Connection` type with f64 float type.
pub type Connection64 = Connection<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Directed weighted edge between two neurons.
///
/// Connections are owned by their source neuron and store
/// index of the destination neuron within the layer it was
/// connected to. New connections can only be made by the
/// `Layer::connect_to` family of methods.
pub struct Connection<F: Float> {
    /// Index of the destination neuron in the target layer.
    target: usize,

    /// Weight of the connection.
    weight: F
}

impl<F: Float> Connection<F> {
    #[inline]
    pub(crate) fn new(target: usize, weight: F) -> Self {
        Self {
            target,
            weight
        }
    }

    #[inline]
    /// Index of the destination neuron in the layer
    /// this connection leads to.
    pub fn target(&self) -> usize {
        self.target
    }

    #[inline]
    /// Return weight of the connection.
    pub fn weight(&self) -> F {
        self.weight
    }

    /// Change weight of the connection.
    ///
    /// Non-finite weights are rejected and the current
    /// weight is kept.
    pub fn set_weight(&mut self, weight: F) -> LayerResult<()> {
        if !weight.is_finite() {
            return Err(LayerError::NonFiniteWeight { index: 0 });
        }

        self.weight = weight;

        Ok(())
    }
}

#[test]
fn test_connection_weight_update() {
    let mut connection = Connection32::new(2, 0.0);

    assert_eq!(connection.target(), 2);
    assert_eq!(connection.weight(), 0.0);

    connection.set_weight(-0.75).unwrap();

    assert_eq!(connection.target(), 2);
    assert_eq!(connection.weight(), -0.75);
}

#[test]
fn test_connection_rejects_non_finite_weight() {
    let mut layer = Layer32::input(1);

    layer.connect_to_with_weights(&Layer32::output(1), &[1.0]).unwrap();

    let connection = &mut layer.neurons_mut()[0].out_connections_mut()[0];

    for weight in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!(connection.set_weight(weight), Err(LayerError::NonFiniteWeight { index: 0 }));
        assert_eq!(connection.weight(), 1.0);
    }

    assert_eq!(layer.weights(), [1.0]);
}

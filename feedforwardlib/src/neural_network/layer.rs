use crate::prelude::*;

/// Generic `Layer` type with f32 float type.
pub type Layer32 = Layer<f32>;

/// Generic `Layer` type with f64 float type.
pub type Layer64 = Layer<f64>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Position of the layer in the network.
///
/// Roles don't change the way layers work. Input layers are
/// conventionally connected outward only, and output layers
/// only receive connections, but nothing stops you from
/// doing otherwise.
pub enum LayerRole {
    Input,

    #[default]
    Hidden,

    Output
}

impl std::fmt::Display for LayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input  => write!(f, "input"),
            Self::Hidden => write!(f, "hidden"),
            Self::Output => write!(f, "output")
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
/// Group of neurons representation.
///
/// Layers have fixed amount of neurons set on creation. A layer
/// can be connected to another one, in which case every neuron
/// of the current layer gets a new outgoing connection to every
/// neuron of the target layer, in the target layer's order.
///
/// Connecting is additive: calling `connect_to` twice appends
/// another full set of connections. Use `reconnect_to` to replace
/// existing connections instead.
///
/// Cloning a layer makes a deep copy of all its neurons and
/// their connections.
///
/// ```
/// use feedforwardlib::prelude::*;
///
/// let mut input = Layer32::input(3);
/// let hidden = Layer32::hidden(2);
///
/// input.connect_to_with_weights(&hidden, &[
///     1.0, 2.0,
///     3.0, 4.0,
///     5.0, 6.0
/// ]).unwrap();
///
/// let weights = input.neurons()[1].out_connections().iter()
///     .map(|connection| connection.weight())
///     .collect::<Vec<_>>();
///
/// assert_eq!(weights, [3.0, 4.0]);
///
/// // Wrong amount of weights doesn't change the layer.
/// let mut output = Layer32::output(1);
///
/// assert!(output.connect_to_with_weights(&input, &[]).is_err());
/// assert!(!output.is_connected());
/// ```
pub struct Layer<F: Float> {
    role: LayerRole,
    neurons: Vec<Neuron<F>>
}

impl<F: Float> Layer<F> {
    /// Build layer with given role and amount of unconnected neurons.
    pub fn new(role: LayerRole, size: usize) -> Self {
        Self {
            role,
            neurons: (0..size).map(|_| Neuron::default()).collect()
        }
    }

    #[inline]
    /// Call `Layer::new` with `LayerRole::Input`.
    pub fn input(size: usize) -> Self {
        Self::new(LayerRole::Input, size)
    }

    #[inline]
    /// Call `Layer::new` with `LayerRole::Hidden`.
    pub fn hidden(size: usize) -> Self {
        Self::new(LayerRole::Hidden, size)
    }

    #[inline]
    /// Call `Layer::new` with `LayerRole::Output`.
    pub fn output(size: usize) -> Self {
        Self::new(LayerRole::Output, size)
    }

    #[inline]
    pub fn role(&self) -> LayerRole {
        self.role
    }

    #[inline]
    /// Return neurons of the current layer.
    pub fn neurons(&self) -> &[Neuron<F>] {
        &self.neurons
    }

    #[inline]
    /// Return neurons of the current layer for weights update.
    pub fn neurons_mut(&mut self) -> &mut [Neuron<F>] {
        &mut self.neurons
    }

    #[inline]
    /// Amount of neurons in the layer.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Total amount of outgoing connections of all the layer's neurons.
    pub fn connections_count(&self) -> usize {
        self.neurons.iter()
            .map(|neuron| neuron.out_connections().len())
            .sum()
    }

    #[inline]
    /// Check if any neuron of the layer has outgoing connections.
    pub fn is_connected(&self) -> bool {
        self.neurons.iter().any(|neuron| !neuron.out_connections().is_empty())
    }

    /// Return weights of all outgoing connections, ordered
    /// by source neuron first and then by connection order.
    pub fn weights(&self) -> Vec<F> {
        self.neurons.iter()
            .flat_map(|neuron| neuron.out_connections())
            .map(|connection| connection.weight())
            .collect()
    }

    /// Check that weights list has exactly `expected` finite numbers.
    pub(crate) fn validate_weights(expected: usize, weights: &[F]) -> LayerResult<()> {
        if weights.len() != expected {
            return Err(LayerError::WeightsCount {
                expected,
                actual: weights.len()
            });
        }

        if let Some(index) = weights.iter().position(|weight| !weight.is_finite()) {
            return Err(LayerError::NonFiniteWeight { index });
        }

        Ok(())
    }

    /// Append connection from every neuron of the current layer to
    /// every neuron of a layer of `target` size.
    fn fan_out(&mut self, target: usize, mut weight: impl FnMut(usize, usize) -> F) {
        for (i, neuron) in self.neurons.iter_mut().enumerate() {
            for j in 0..target {
                neuron.connect(j, weight(i, j));
            }
        }
    }

    #[inline]
    /// Connect every neuron of the current layer to every neuron
    /// of the target layer with zero weights.
    pub fn connect_to(&mut self, target: &Layer<F>) {
        self.fan_out(target.len(), |_, _| F::ZERO);
    }

    /// Connect every neuron of the current layer to every neuron
    /// of the target layer using given weights.
    ///
    /// Connection from the `i`th neuron of the current layer to the
    /// `j`th neuron of the target one will get `weights[i * target.len() + j]`
    /// weight. Weights list must contain exactly `self.len() * target.len()`
    /// finite numbers, otherwise an error is returned and no connections
    /// are made.
    pub fn connect_to_with_weights(&mut self, target: &Layer<F>, weights: &[F]) -> LayerResult<()> {
        Self::validate_weights(self.len() * target.len(), weights)?;

        let size = target.len();

        self.fan_out(size, |i, j| weights[i * size + j]);

        Ok(())
    }

    /// Connect every neuron of the current layer to every neuron
    /// of the target layer with weights calculated by the given
    /// function from the source and target neurons' indexes.
    pub fn connect_to_with(&mut self, target: &Layer<F>, mut weight: impl FnMut(usize, usize) -> F) -> LayerResult<()> {
        let size = target.len();

        let weights = (0..self.len())
            .flat_map(|i| (0..size).map(move |j| (i, j)))
            .map(|(i, j)| weight(i, j))
            .collect::<Vec<F>>();

        self.connect_to_with_weights(target, &weights)
    }

    #[inline]
    /// Connect every neuron of the current layer to every neuron
    /// of the target layer with random weights in `[-1.0, 1.0]` range.
    pub fn connect_to_random(&mut self, target: &Layer<F>) {
        self.fan_out(target.len(), |_, _| F::random());
    }

    #[inline]
    /// Remove all outgoing connections of the layer's neurons.
    pub fn disconnect(&mut self) {
        for neuron in &mut self.neurons {
            neuron.disconnect();
        }
    }

    #[inline]
    /// Replace all existing connections of the layer with
    /// zero weight connections to the target layer.
    pub fn reconnect_to(&mut self, target: &Layer<F>) {
        self.disconnect();
        self.connect_to(target);
    }

    /// Replace all existing connections of the layer with
    /// connections to the target layer using given weights.
    ///
    /// Existing connections are kept if weights are invalid.
    pub fn reconnect_to_with_weights(&mut self, target: &Layer<F>, weights: &[F]) -> LayerResult<()> {
        Self::validate_weights(self.len() * target.len(), weights)?;

        self.disconnect();
        self.connect_to_with_weights(target, weights)
    }
}

#[cfg(test)]
/// Check that every neuron of the layer has given amount of outgoing connections.
fn assert_fan_out<F: Float>(layer: &Layer<F>, connections: usize) {
    for neuron in layer.neurons() {
        assert_eq!(neuron.out_connections().len(), connections);
    }
}

#[test]
fn test_default_layer() {
    let layer = Layer32::default();

    assert!(layer.is_empty());
    assert_eq!(layer.role(), LayerRole::Hidden);
    assert!(!layer.is_connected());
}

#[test]
fn test_layers_construction() {
    for size in [0, 1, 9, 42] {
        let input = Layer32::input(size);
        let hidden = Layer32::hidden(size);
        let output = Layer32::output(size);

        assert_eq!(input.neurons().len(), size);
        assert_eq!(hidden.neurons().len(), size);
        assert_eq!(output.neurons().len(), size);

        assert_eq!(input.role(), LayerRole::Input);
        assert_eq!(hidden.role(), LayerRole::Hidden);
        assert_eq!(output.role(), LayerRole::Output);

        assert_fan_out(&input, 0);
        assert_fan_out(&hidden, 0);
        assert_fan_out(&output, 0);
    }
}

#[test]
fn test_connect_layers_fan_out() {
    let pairs = [
        (LayerRole::Input,  1, LayerRole::Hidden, 1),
        (LayerRole::Input,  9, LayerRole::Hidden, 9),
        (LayerRole::Hidden, 1, LayerRole::Hidden, 1),
        (LayerRole::Hidden, 9, LayerRole::Hidden, 9),
        (LayerRole::Hidden, 3, LayerRole::Hidden, 4),
        (LayerRole::Hidden, 1, LayerRole::Output, 1),
        (LayerRole::Hidden, 9, LayerRole::Output, 9),
        (LayerRole::Hidden, 3, LayerRole::Output, 5)
    ];

    for (source_role, source_size, target_role, target_size) in pairs {
        let mut source = Layer32::new(source_role, source_size);
        let target = Layer32::new(target_role, target_size);

        source.connect_to(&target);

        assert_fan_out(&source, target_size);
        assert_fan_out(&target, 0);

        assert_eq!(source.connections_count(), source_size * target_size);
    }
}

#[test]
fn test_connect_layers_zero_weights() {
    let mut input = Layer32::input(3);
    let hidden = Layer32::hidden(3);

    input.connect_to(&hidden);

    for neuron in input.neurons() {
        for (j, connection) in neuron.out_connections().iter().enumerate() {
            assert_eq!(connection.weight(), 0.0);
            assert_eq!(connection.target(), j);
        }
    }
}

#[test]
fn test_connect_empty_layers() {
    let mut empty = Layer32::input(0);
    let mut hidden = Layer32::hidden(4);

    empty.connect_to(&hidden);
    hidden.connect_to(&Layer32::output(0));

    assert!(!empty.is_connected());
    assert!(!hidden.is_connected());

    assert!(empty.connect_to_with_weights(&hidden, &[]).is_ok());
    assert!(hidden.connect_to_with_weights(&Layer32::output(0), &[]).is_ok());
}

#[test]
fn test_connect_layers_with_weights() {
    let mut input = Layer32::input(3);
    let hidden = Layer32::hidden(3);

    let weights = (1..=9).map(|n| n as f32).collect::<Vec<_>>();

    input.connect_to_with_weights(&hidden, &weights).unwrap();

    let expected = [
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0]
    ];

    for (neuron, expected) in input.neurons().iter().zip(expected) {
        let weights = neuron.out_connections().iter()
            .map(Connection::weight)
            .collect::<Vec<_>>();

        assert_eq!(weights, expected);
    }

    assert_eq!(input.weights(), weights);
}

#[test]
fn test_connect_layers_with_rectangular_weights() {
    let mut hidden = Layer64::hidden(2);
    let output = Layer64::output(3);

    hidden.connect_to_with_weights(&output, &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();

    assert_eq!(hidden.neurons()[0].out_connections()[2].weight(), 0.3);
    assert_eq!(hidden.neurons()[1].out_connections()[0].weight(), 0.4);
}

#[test]
fn test_connect_layers_with_wrong_amount_of_weights() {
    let mut input = Layer32::input(3);
    let hidden = Layer32::hidden(3);

    for weights in [vec![], vec![1.0_f32; 8], vec![1.0; 10]] {
        let result = input.connect_to_with_weights(&hidden, &weights);

        assert_eq!(result, Err(LayerError::WeightsCount {
            expected: 9,
            actual: weights.len()
        }));

        assert!(result.unwrap_err().is_invalid_argument());

        assert_fan_out(&input, 0);
    }
}

#[test]
fn test_connect_layers_with_non_finite_weights() {
    let mut input = Layer32::input(2);
    let hidden = Layer32::hidden(2);

    let result = input.connect_to_with_weights(&hidden, &[0.0, 1.0, f32::NAN, 2.0]);

    assert_eq!(result, Err(LayerError::NonFiniteWeight { index: 2 }));
    assert!(!input.is_connected());

    let result = input.connect_to_with(&hidden, |i, _| if i == 1 { f32::INFINITY } else { 1.0 });

    assert_eq!(result, Err(LayerError::NonFiniteWeight { index: 2 }));
    assert!(!input.is_connected());
}

#[test]
fn test_connect_layers_with_function() {
    let mut input = Layer64::input(2);
    let output = Layer64::output(3);

    input.connect_to_with(&output, |i, j| (i * 10 + j) as f64).unwrap();

    assert_eq!(input.weights(), [0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
}

#[test]
fn test_connect_layers_with_random_weights() {
    let mut input = Layer32::input(4);
    let hidden = Layer32::hidden(5);

    input.connect_to_random(&hidden);

    assert_fan_out(&input, 5);

    assert!(input.weights().iter().all(|weight| (-1.0..=1.0).contains(weight)));
}

#[test]
fn test_connect_layers_twice() {
    let mut input = Layer32::input(2);
    let hidden = Layer32::hidden(3);
    let output = Layer32::output(1);

    input.connect_to(&hidden);
    input.connect_to_with_weights(&output, &[1.0, 2.0]).unwrap();

    assert_fan_out(&input, 4);

    assert_eq!(input.weights(), [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0]);

    let targets = input.neurons()[0].out_connections().iter()
        .map(Connection::target)
        .collect::<Vec<_>>();

    assert_eq!(targets, [0, 1, 2, 0]);
}

#[test]
fn test_reconnect_layers() {
    let mut input = Layer32::input(2);
    let hidden = Layer32::hidden(3);
    let output = Layer32::output(2);

    input.connect_to(&hidden);
    input.reconnect_to(&output);

    assert_fan_out(&input, 2);

    input.reconnect_to_with_weights(&hidden, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    assert_eq!(input.weights(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    // Invalid weights keep previous connections.
    assert!(input.reconnect_to_with_weights(&output, &[1.0]).is_err());

    assert_eq!(input.weights(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    input.disconnect();

    assert!(!input.is_connected());
    assert_eq!(input.len(), 2);
}

#[test]
fn test_layer_copy_is_independent() {
    let mut original = Layer32::input(3);
    let hidden = Layer32::hidden(2);

    original.connect_to_with_weights(&hidden, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    let mut copy = original.clone();

    assert_eq!(copy, original);

    copy.connect_to(&hidden);
    copy.neurons_mut()[0].out_connections_mut()[0].set_weight(100.0).unwrap();

    assert_fan_out(&original, 2);
    assert_fan_out(&copy, 4);

    assert_eq!(original.weights(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    // Copy assignment over an existing layer.
    let mut assigned = Layer32::output(7);

    assigned.clone_from(&original);

    assert_eq!(assigned.len(), 3);
    assert_eq!(assigned.role(), LayerRole::Input);

    assigned.disconnect();

    assert!(original.is_connected());
}

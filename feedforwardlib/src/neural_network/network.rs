use crate::prelude::*;

/// Generic `Network` type with f32 float type.
pub type Network32 = Network<f32>;

/// Generic `Network` type with f64 float type.
pub type Network64 = Network<f64>;

#[derive(Debug, Clone, PartialEq)]
/// Chain of fully connected layers.
///
/// First layer of the network is an input layer, the last one
/// is an output layer, and everything between them are hidden
/// layers. Each layer is connected to the next one.
///
/// ```
/// use feedforwardlib::prelude::*;
///
/// let network = Network32::new(&[3, 4, 2]).unwrap();
///
/// assert_eq!(network.layers().len(), 3);
/// assert_eq!(network.input().role(), LayerRole::Input);
/// assert_eq!(network.output().role(), LayerRole::Output);
///
/// // 3 * 4 + 4 * 2
/// assert_eq!(network.params(), 20);
/// ```
pub struct Network<F: Float> {
    layers: Vec<Layer<F>>
}

impl<F: Float> Network<F> {
    /// Build unconnected layers with given sizes.
    fn build_layers(sizes: &[usize]) -> LayerResult<Vec<Layer<F>>> {
        if sizes.len() < 2 {
            return Err(LayerError::NotEnoughLayers(sizes.len()));
        }

        let last = sizes.len() - 1;

        let layers = sizes.iter()
            .enumerate()
            .map(|(i, size)| {
                let role = match i {
                    0 => LayerRole::Input,
                    i if i == last => LayerRole::Output,
                    _ => LayerRole::Hidden
                };

                Layer::new(role, *size)
            })
            .collect();

        Ok(layers)
    }

    /// Connect each layer to the next one using given function.
    fn connect_layers(
        mut layers: Vec<Layer<F>>,
        mut connect: impl FnMut(&mut Layer<F>, &Layer<F>) -> LayerResult<()>
    ) -> LayerResult<Self> {
        for i in 0..layers.len() - 1 {
            let (head, tail) = layers.split_at_mut(i + 1);

            connect(&mut head[i], &tail[0])?;
        }

        Ok(Self {
            layers
        })
    }

    /// Build network from given layer sizes with zero weights.
    pub fn new(sizes: &[usize]) -> LayerResult<Self> {
        Self::connect_layers(Self::build_layers(sizes)?, |layer, next| {
            layer.connect_to(next);

            Ok(())
        })
    }

    /// Build network from given layer sizes with random weights
    /// in `[-1.0, 1.0]` range.
    pub fn random(sizes: &[usize]) -> LayerResult<Self> {
        Self::connect_layers(Self::build_layers(sizes)?, |layer, next| {
            layer.connect_to_random(next);

            Ok(())
        })
    }

    /// Build network from given layer sizes and weights.
    ///
    /// Weights list is a concatenation of row-major weights of
    /// each pair of consecutive layers, so for `[3, 4, 2]` sizes
    /// first 12 weights connect input layer to the hidden one,
    /// and the remaining 8 connect hidden layer to the output one.
    pub fn with_weights(sizes: &[usize], weights: &[F]) -> LayerResult<Self> {
        let layers = Self::build_layers(sizes)?;

        let expected = sizes.windows(2)
            .map(|pair| pair[0] * pair[1])
            .sum::<usize>();

        Layer::validate_weights(expected, weights)?;

        let mut offset = 0;

        Self::connect_layers(layers, |layer, next| {
            let count = layer.len() * next.len();

            layer.connect_to_with_weights(next, &weights[offset..offset + count])?;

            offset += count;

            Ok(())
        })
    }

    #[inline]
    /// Return all layers of the network.
    pub fn layers(&self) -> &[Layer<F>] {
        &self.layers
    }

    #[inline]
    /// Return all layers of the network for weights update.
    pub fn layers_mut(&mut self) -> &mut [Layer<F>] {
        &mut self.layers
    }

    #[inline]
    pub fn input(&self) -> &Layer<F> {
        &self.layers[0]
    }

    #[inline]
    pub fn output(&self) -> &Layer<F> {
        &self.layers[self.layers.len() - 1]
    }

    #[inline]
    /// Return amount of neurons in each layer.
    pub fn sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::len).collect()
    }

    #[inline]
    /// Amount of parameters (connection weights) of the network.
    pub fn params(&self) -> usize {
        self.layers.iter().map(Layer::connections_count).sum()
    }

    /// Return weights of all layers in the same order
    /// as used by `Network::with_weights`.
    pub fn weights(&self) -> Vec<F> {
        self.layers.iter()
            .flat_map(Layer::weights)
            .collect()
    }
}

#[test]
fn test_network_construction() {
    let network = Network32::new(&[2, 3, 3, 1]).unwrap();

    let roles = network.layers().iter()
        .map(Layer::role)
        .collect::<Vec<_>>();

    assert_eq!(roles, [LayerRole::Input, LayerRole::Hidden, LayerRole::Hidden, LayerRole::Output]);
    assert_eq!(network.sizes(), [2, 3, 3, 1]);

    for pair in network.layers().windows(2) {
        for neuron in pair[0].neurons() {
            assert_eq!(neuron.out_connections().len(), pair[1].len());
        }
    }

    assert!(!network.output().is_connected());
    assert_eq!(network.params(), 2 * 3 + 3 * 3 + 3);
    assert!(network.weights().iter().all(|weight| *weight == 0.0));
}

#[test]
fn test_network_not_enough_layers() {
    assert_eq!(Network32::new(&[]), Err(LayerError::NotEnoughLayers(0)));
    assert_eq!(Network32::random(&[5]), Err(LayerError::NotEnoughLayers(1)));
    assert_eq!(Network32::with_weights(&[5], &[]), Err(LayerError::NotEnoughLayers(1)));
}

#[test]
fn test_network_with_weights() {
    let weights = (0..20).map(|n| n as f64).collect::<Vec<_>>();

    let network = Network64::with_weights(&[3, 4, 2], &weights).unwrap();

    assert_eq!(network.layers()[0].weights(), weights[..12]);
    assert_eq!(network.layers()[1].weights(), weights[12..]);
    assert_eq!(network.weights(), weights);

    assert_eq!(network.layers()[1].neurons()[2].out_connections()[1].weight(), 17.0);

    assert_eq!(Network64::with_weights(&[3, 4, 2], &weights[1..]), Err(LayerError::WeightsCount {
        expected: 20,
        actual: 19
    }));

    let mut weights = weights;

    weights[15] = f64::NAN;

    assert_eq!(Network64::with_weights(&[3, 4, 2], &weights), Err(LayerError::NonFiniteWeight {
        index: 15
    }));
}

#[test]
fn test_network_random() {
    let mut network = Network32::random(&[4, 8, 2]).unwrap();

    assert_eq!(network.params(), 48);
    assert!(network.weights().iter().all(|weight| (-1.0..=1.0).contains(weight)));

    network.layers_mut()[0].neurons_mut()[0].out_connections_mut()[0].set_weight(5.0).unwrap();

    assert_eq!(network.input().neurons()[0].out_connections()[0].weight(), 5.0);
}

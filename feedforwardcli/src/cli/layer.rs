use colorful::Colorful;

use feedforwardlib::prelude::*;

/// Format weights of the source layer's connections as a table
/// with one row per source neuron.
pub fn format_connections<F: Float>(layer: &Layer<F>) -> Vec<String> {
    layer.neurons().iter()
        .enumerate()
        .map(|(i, neuron)| {
            let weights = neuron.out_connections().iter()
                .map(|connection| format!("{:>8.4}", connection.weight()))
                .collect::<Vec<_>>()
                .join(" ");

            format!("{i:>4} -> [{weights} ]")
        })
        .collect()
}

/// Connect input layer of `from` neurons to an output layer
/// of `to` neurons with given, random or zero weights.
pub fn connect_layers(from: usize, to: usize, weights: Option<Vec<f32>>, random: bool) -> LayerResult<Layer32> {
    let mut source = Layer32::input(from);
    let target = Layer32::output(to);

    match weights {
        Some(weights) => source.connect_to_with_weights(&target, &weights)?,
        None if random => source.connect_to_random(&target),
        None => source.connect_to(&target)
    }

    Ok(source)
}

pub fn connect(from: usize, to: usize, weights: Option<Vec<f32>>, random: bool) -> anyhow::Result<()> {
    println!("⏳ Connecting {from} neurons to {to} neurons...");

    match connect_layers(from, to, weights, random) {
        Ok(source) => {
            for row in format_connections(&source) {
                println!("{row}");
            }

            println!("{}", format!("✅ Created {} connections", source.connections_count()).green());
        }

        Err(err) => eprintln!("{}", format!("🧯 Failed to connect layers: {err}").red())
    }

    Ok(())
}

#[test]
fn test_format_connections() {
    let mut source = Layer32::input(2);

    source.connect_to_with_weights(&Layer32::output(2), &[1.0, -0.5, 0.25, 2.0]).unwrap();

    assert_eq!(format_connections(&source), [
        "   0 -> [  1.0000  -0.5000 ]",
        "   1 -> [  0.2500   2.0000 ]"
    ]);

    assert!(format_connections(&Layer32::input(0)).is_empty());
}

#[test]
fn test_connect_layers_command() {
    let source = connect_layers(2, 3, None, false).unwrap();

    assert_eq!(source.connections_count(), 6);
    assert!(source.weights().iter().all(|weight| *weight == 0.0));

    let source = connect_layers(1, 2, Some(vec![0.5, -0.5]), false).unwrap();

    assert_eq!(source.weights(), [0.5, -0.5]);

    let source = connect_layers(2, 2, None, true).unwrap();

    assert!(source.weights().iter().all(|weight| (-1.0..=1.0).contains(weight)));
}

#[test]
fn test_connect_layers_command_wrong_weights() {
    assert_eq!(connect_layers(3, 3, Some(vec![1.0; 4]), false).unwrap_err(), LayerError::WeightsCount {
        expected: 9,
        actual: 4
    });

    assert_eq!(connect_layers(1, 1, Some(vec![f32::NAN]), false).unwrap_err(), LayerError::NonFiniteWeight {
        index: 0
    });

    // Errors are reported to the user, the command itself succeeds.
    assert!(connect(3, 3, Some(vec![]), false).is_ok());
}

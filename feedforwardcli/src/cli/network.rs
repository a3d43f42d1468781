use clap::Parser;
use colorful::Colorful;
use serde::Serialize;

use feedforwardlib::prelude::*;

#[derive(Parser)]
pub enum NetworkCLI {
    /// Print topology of the network with zero weights.
    Inspect {
        #[arg(long)]
        /// Print summary in JSON format.
        json: bool
    },

    /// Print topology of the network with random weights.
    Random {
        #[arg(long)]
        /// Print summary in JSON format.
        json: bool,

        #[arg(long)]
        /// Print weights of all connections.
        show_weights: bool
    },

    /// Print topology of the network with given weights.
    Weights {
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        /// Weights of each pair of consecutive layers in row-major order.
        weights: Vec<f32>,

        #[arg(long)]
        /// Print summary in JSON format.
        json: bool
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerSummary {
    pub role: String,
    pub neurons: usize,
    pub connections: usize
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub layers: Vec<LayerSummary>,
    pub params: usize
}

impl NetworkSummary {
    pub fn new<F: Float>(network: &Network<F>) -> Self {
        Self {
            layers: network.layers().iter()
                .map(|layer| LayerSummary {
                    role: layer.role().to_string(),
                    neurons: layer.len(),
                    connections: layer.connections_count()
                })
                .collect(),

            params: network.params()
        }
    }

    fn print(&self, json: bool) -> anyhow::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);

            return Ok(());
        }

        for (i, layer) in self.layers.iter().enumerate() {
            println!(
                "  {} {} layer: {} neurons, {} outgoing connections",
                format!("#{i}").yellow(),
                layer.role,
                layer.neurons,
                layer.connections
            );
        }

        println!();
        println!("{} {}", "📖 Params:".blue(), self.params);

        Ok(())
    }
}

impl NetworkCLI {
    #[inline]
    pub fn execute(self, layers: Vec<usize>) -> anyhow::Result<()> {
        match self {
            Self::Inspect { json } => {
                if !json {
                    println!("⏳ Building network...");
                }

                match Network32::new(&layers) {
                    Ok(network) => NetworkSummary::new(&network).print(json)?,
                    Err(err) => eprintln!("{}", format!("🧯 Failed to build network: {err}").red())
                }
            }

            Self::Random { json, show_weights } => {
                if !json {
                    println!("⏳ Building network with random weights...");
                }

                match Network32::random(&layers) {
                    Ok(network) => {
                        NetworkSummary::new(&network).print(json)?;

                        if show_weights && !json {
                            println!();

                            for (i, layer) in network.layers().iter().enumerate() {
                                if layer.is_connected() {
                                    println!("  {} {:?}", format!("#{i}").yellow(), layer.weights());
                                }
                            }
                        }
                    }

                    Err(err) => eprintln!("{}", format!("🧯 Failed to build network: {err}").red())
                }
            }

            Self::Weights { weights, json } => {
                if !json {
                    println!("⏳ Building network from {} weights...", weights.len());
                }

                match Network32::with_weights(&layers, &weights) {
                    Ok(network) => {
                        NetworkSummary::new(&network).print(json)?;

                        if !json {
                            println!("{}", "✅ All weights assigned".green());
                        }
                    }

                    Err(err) => eprintln!("{}", format!("🧯 Failed to build network: {err}").red())
                }
            }
        }

        Ok(())
    }
}

#[test]
fn test_network_summary() {
    let network = Network32::new(&[3, 4, 2]).unwrap();

    let summary = NetworkSummary::new(&network);

    assert_eq!(summary.params, 20);

    assert_eq!(summary.layers, [
        LayerSummary { role: String::from("input"),  neurons: 3, connections: 12 },
        LayerSummary { role: String::from("hidden"), neurons: 4, connections: 8 },
        LayerSummary { role: String::from("output"), neurons: 2, connections: 0 }
    ]);

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["params"], 20);
    assert_eq!(json["layers"][1]["role"], "hidden");
}

use clap::Parser;

pub mod network;
pub mod layer;

#[derive(Parser)]
#[command(version, about)]
pub enum CLI {
    /// Build feed-forward network from layer sizes.
    Network {
        #[arg(long, short, value_delimiter = ',', required = true)]
        /// Amount of neurons in each layer, from input to output.
        ///
        /// At least 2 layers are needed, e.g. `--layers 3,4,2`.
        layers: Vec<usize>,

        #[command(subcommand)]
        command: network::NetworkCLI
    },

    /// Connect two layers and print weights of their connections.
    Connect {
        #[arg(long)]
        /// Amount of neurons in the source layer.
        from: usize,

        #[arg(long)]
        /// Amount of neurons in the target layer.
        to: usize,

        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        /// Connection weights in row-major order.
        ///
        /// Must contain exactly `from * to` numbers. Zero weights are used if not set.
        weights: Option<Vec<f32>>,

        #[arg(long, conflicts_with = "weights")]
        /// Use random weights in `[-1.0, 1.0]` range.
        random: bool
    }
}

impl CLI {
    #[inline]
    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            Self::Network { layers, command } => command.execute(layers),
            Self::Connect { from, to, weights, random } => layer::connect(from, to, weights, random)
        }
    }
}

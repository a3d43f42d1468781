pub mod error;
pub mod neural_network;

pub mod prelude {
    pub use super::error::*;
    pub use super::neural_network::prelude::*;
}

pub mod float;
pub mod connection;
pub mod neuron;
pub mod layer;
pub mod network;

pub mod prelude {
    pub use super::float::*;
    pub use super::connection::*;
    pub use super::neuron::*;
    pub use super::layer::*;
    pub use super::network::*;
}

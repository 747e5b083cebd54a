//! # nebula-nn - Neurons and Layers on the Nebula Graph
//!
//! Parameters are ordinary leaves of a [`nebula_core::Graph`]; a forward pass
//! appends `mul`/`add`/activation nodes to the same graph, and
//! [`nebula_core::Graph::backward`] fills in the parameter gradients.
//!
//! ```
//! use nebula_core::Graph;
//! use nebula_nn::{init::seeded_rng, Activation, Layer, LayerConfig, NnError};
//!
//! # fn main() -> Result<(), NnError> {
//! let mut graph = Graph::new();
//! let mut rng = seeded_rng(42);
//! let hidden = Layer::new(&mut graph, &LayerConfig::new(2, 3), &mut rng)?;
//! let output = Layer::new(
//!     &mut graph,
//!     &LayerConfig::new(3, 1).with_activation(Activation::Identity),
//!     &mut rng,
//! )?;
//!
//! let x = [graph.leaf(0.5), graph.leaf(-1.0)];
//! let h = hidden.forward(&mut graph, &x)?;
//! let y = output.forward(&mut graph, &h)?;
//! graph.backward(y[0])?;
//!
//! for p in hidden.parameters() {
//!     assert!(graph.gradient(p)?.is_finite());
//! }
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod error;
pub mod init;
pub mod layer;
pub mod neuron;

pub use activation::Activation;
pub use error::NnError;
pub use init::{seeded_rng, Init};
pub use layer::{Layer, LayerConfig};
pub use neuron::Neuron;

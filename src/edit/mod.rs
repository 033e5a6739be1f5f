//! Editing-Kern: Vertex-Chain, Beobachter und Zeichensitzung.

pub mod chain;
pub mod observer;
pub mod session;

pub use chain::{ChainProfile, MidpointNode, VertexChain, VertexNode};
pub use observer::{ChainObserver, NodeHandle, NodeRole, NullObserver};
pub use session::DrawSession;

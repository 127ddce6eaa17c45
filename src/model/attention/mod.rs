//! Attention mechanisms
mod attention;
pub use attention::Attention;

mod dot_product;
pub use dot_product::DotProductAttention;

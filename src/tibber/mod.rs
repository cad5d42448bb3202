//! Tibber price API: GraphQL fetch and wire decoding.

mod fetch;

pub use fetch::read_prices;

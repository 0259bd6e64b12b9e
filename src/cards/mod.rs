//! Card system: cards, partial information, hands, and the deck.
//!
//! ## Key Types
//!
//! - `Color`/`Rank`: index-typed card attributes, interpreted via `Config`
//! - `Card`: immutable (color, rank) value; the deck is a multiset of these
//! - `Information`: what a card's holder has been told about it
//! - `Hand`: index-addressed slots pairing a card with its information
//! - `Deck`: deterministic construction, shuffle, draw

pub mod card;
pub mod deck;
pub mod hand;
pub mod information;

pub use card::{Card, Color, Rank};
pub use deck::Deck;
pub use hand::{Hand, HandSlot};
pub use information::Information;

//! Serde representation of cards: `{ "value": 1..13, "suit": 0..3 }`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;

#[derive(Serialize, Deserialize)]
struct CardRepr {
    value: u8,
    suit: u8,
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CardRepr {
            value: self.rank.value(),
            suit: self.suit.index(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = CardRepr::deserialize(deserializer)?;
        Card::from_value_suit(repr.value, repr.suit).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "card out of range: value={} suit={}",
                repr.value, repr.suit
            ))
        })
    }
}

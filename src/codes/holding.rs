//! Holding and product types. Wire codes equal the tags.

use super::wire_codec;

wire_codec! {
    /// Settlement state of a holding.
    pub enum HoldingType: &'static str {
        /// Bought, not yet delivered to the demat account.
        T1 = "T1", "T1", "Bought, pending delivery";
        Hld = "HLD", "HLD", "Held in demat account";
    }
}

wire_codec! {
    /// Product an order or position is booked under.
    pub enum ProductType: &'static str {
        Cnc = "CNC", "CNC", "Cash and carry (delivery)";
        Intraday = "INTRADAY", "INTRADAY", "Intraday";
        Margin = "MARGIN", "MARGIN", "Margin (derivatives carry forward)";
        Co = "CO", "CO", "Cover order";
        Bo = "BO", "BO", "Bracket order";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::WireCode;

    #[test]
    fn test_identity_codes() {
        for tag in ProductType::all() {
            assert_eq!(tag.to_wire(), tag.as_str());
        }
        for tag in HoldingType::all() {
            assert_eq!(tag.to_wire(), tag.as_str());
        }
        assert_eq!(ProductType::from_wire("intraday"), None);
    }
}

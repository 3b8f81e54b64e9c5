/// Bluetooth LE address type as carried in the `AT` segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// Public device address (`0`)
    Public = 0,
    /// Random device address (`1`)
    Random = 1,
}

impl AddressType {
    /// Parse the raw `AT` token. Only `"0"` and `"1"` are known.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(AddressType::Public),
            "1" => Some(AddressType::Random),
            _ => None,
        }
    }

    /// Raw `AT` token
    pub fn token(&self) -> &'static str {
        match self {
            AddressType::Public => "0",
            AddressType::Random => "1",
        }
    }

    /// Display label
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::Public => "Public",
            AddressType::Random => "Random",
        }
    }
}

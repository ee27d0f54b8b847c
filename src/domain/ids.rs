use crate::error::ShopError;
use std::fmt;

/// Caller-supplied customer identifier.
///
/// Ensures that client ids are always positive, so a client can never be
/// confused with an empty station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(u32);

impl ClientId {
    pub fn new(id: u32) -> Result<Self, ShopError> {
        if id == 0 {
            Err(ShopError::InvalidClientId)
        } else {
            Ok(Self(id))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Index of a server's station, assigned once at shop construction.
///
/// Ids handed out by [`ShopConfig::server_ids`] are always in range; the shop
/// re-validates on every operation so a hand-built id fails fast instead of
/// touching another station's state.
///
/// [`ShopConfig::server_ids`]: crate::domain::config::ShopConfig::server_ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerId(usize);

impl ServerId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_must_be_positive() {
        assert_eq!(ClientId::new(0), Err(ShopError::InvalidClientId));
        assert_eq!(ClientId::new(3).map(ClientId::get), Ok(3));
    }
}

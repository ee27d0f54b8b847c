use crate::domain::ids::ServerId;
use crate::error::ShopError;

/// Immutable shop dimensions, validated at construction.
///
/// A shop needs at least one server; a waiting room with zero chairs is
/// legal and means clients are turned away whenever every server is busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopConfig {
    server_count: usize,
    waiting_capacity: usize,
}

impl ShopConfig {
    pub fn new(server_count: usize, waiting_capacity: usize) -> Result<Self, ShopError> {
        if server_count == 0 {
            return Err(ShopError::NoServers);
        }
        Ok(Self {
            server_count,
            waiting_capacity,
        })
    }

    pub fn server_count(&self) -> usize {
        self.server_count
    }

    pub fn waiting_capacity(&self) -> usize {
        self.waiting_capacity
    }

    /// All server ids of this shop, in station order.
    pub fn server_ids(&self) -> impl Iterator<Item = ServerId> + use<> {
        (0..self.server_count).map(ServerId::new)
    }
}

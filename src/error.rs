use crate::domain::ids::{ClientId, ServerId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShopError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShopError {
    #[error("a shop needs at least one server")]
    NoServers,
    #[error("client ids must be positive")]
    InvalidClientId,
    #[error("unknown server id {0}")]
    UnknownServer(ServerId),
    #[error("client {client} is not paired with server {server}")]
    NotPaired { client: ClientId, server: ServerId },
    #[error("server {0} has no client in service")]
    NoClientInService(ServerId),
}

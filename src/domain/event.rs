use crate::domain::ids::{ClientId, ServerId};

/// One observable transition on the shop floor.
///
/// Events are emitted while the shop lock is held, so the order an observer
/// sees is the linearization order of the underlying operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopEvent {
    /// The waiting room was full (or had zero chairs with every server
    /// busy); the client left unserved.
    TurnedAway { client: ClientId },
    /// The client took a waiting chair; `free_seats` chairs remain.
    TookSeat { client: ClientId, free_seats: usize },
    /// The client was paired with a server's station.
    Paired {
        client: ClientId,
        server: ServerId,
        free_seats: usize,
    },
    /// The client is waiting for its server to finish the service.
    AwaitingFinish { client: ClientId, server: ServerId },
    /// The client paid and left; the server is available again.
    Paid { client: ClientId, server: ServerId },
    /// The server has no paired client and nobody is waiting.
    Sleeping { server: ServerId },
    /// The server picked up its paired client and started the service.
    ServiceStarted { server: ServerId, client: ClientId },
    /// The server declared the service done.
    ServiceFinished { server: ServerId, client: ClientId },
    /// The server collected payment and called in the next customer.
    NextCalled { server: ServerId },
}

use crate::domain::config::ShopConfig;
use crate::domain::event::ShopEvent;
use crate::domain::ids::{ClientId, ServerId};
use crate::domain::ports::{NoopObserver, ShopObserverBox};
use crate::error::{Result, ShopError};
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Outcome of a client's [`Shop::request_service`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The client was paired with this server.
    Paired(ServerId),
    /// No chair was free (or, in a zero-capacity shop, no server was idle).
    TurnedAway,
}

/// Per-server service state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Station {
    Idle,
    Servicing(ClientId),
    AwaitingPayment(ClientId),
}

/// One server's slot on the floor: the service state plus the payment flag.
///
/// `paid` is deliberately not part of [`Station`]: the server is already back
/// in the available queue when its client pays, so a new pairing may
/// overwrite `state` before the server's `finish_client` resumes. The flag
/// survives that overwrite; only `finish_client` resets it, at the start of
/// the next cycle.
#[derive(Debug, Clone, Copy)]
struct StationSlot {
    state: Station,
    paid: bool,
}

impl StationSlot {
    const IDLE: Self = Self {
        state: Station::Idle,
        paid: false,
    };
}

/// Condition variables owned by one server's station.
///
/// `pairing` parks the server until a client is assigned, `finished` parks
/// that client until the service ends, `settled` parks the server until the
/// client pays. Keeping them bundled per station means a wake-up can never
/// target the wrong server.
#[derive(Default)]
struct StationSignals {
    pairing: Condvar,
    finished: Condvar,
    settled: Condvar,
}

/// Everything mutable on the shop floor, guarded by one lock.
struct Floor {
    waiting: VecDeque<ClientId>,
    available: VecDeque<ServerId>,
    stations: Vec<StationSlot>,
    dropoffs: u64,
}

/// The shop monitor.
///
/// `Shop` owns all shared state behind a single mutex and exposes the four
/// synchronized operations used by server and client actors. Every blocking
/// wait is a predicate loop on a condition variable, so a spurious or stale
/// wake-up only costs one re-check, and the lock is atomically released while
/// a thread is suspended.
///
/// The waiting room is strict FIFO: a queued client is paired only once it
/// reaches the front of the queue and a server is free. Among idle servers,
/// the one that has been available longest serves next.
pub struct Shop {
    config: ShopConfig,
    floor: Mutex<Floor>,
    /// Wakes queued clients whenever a server may have become available.
    seat_freed: Condvar,
    signals: Vec<StationSignals>,
    observer: ShopObserverBox,
}

impl Shop {
    pub fn new(config: ShopConfig) -> Self {
        Self::with_observer(config, Box::new(NoopObserver))
    }

    pub fn with_observer(config: ShopConfig, observer: ShopObserverBox) -> Self {
        let floor = Floor {
            waiting: VecDeque::new(),
            available: config.server_ids().collect(),
            stations: vec![StationSlot::IDLE; config.server_count()],
            dropoffs: 0,
        };
        let signals = (0..config.server_count())
            .map(|_| StationSignals::default())
            .collect();
        Self {
            config,
            floor: Mutex::new(floor),
            seat_freed: Condvar::new(),
            signals,
            observer,
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Number of clients turned away so far.
    pub fn dropoffs(&self) -> u64 {
        self.lock().dropoffs
    }

    /// A client asks for service, waiting in a chair if it has to.
    ///
    /// Returns [`Admission::TurnedAway`] when every chair is taken, or when
    /// the shop has no chairs and no idle server. The full-room check is
    /// deliberately not re-run against server availability: a client that
    /// finds the room full leaves even if a server frees up in the same
    /// instant.
    pub fn request_service(&self, client: ClientId) -> Admission {
        let mut floor = self.lock();
        let seats = self.config.waiting_capacity();

        let server = if seats > 0 {
            if floor.waiting.len() == seats {
                floor.dropoffs += 1;
                self.observer.notify(ShopEvent::TurnedAway { client });
                return Admission::TurnedAway;
            }
            match floor.available.pop_front() {
                Some(server) => server,
                None => {
                    floor.waiting.push_back(client);
                    debug_assert!(floor.waiting.len() <= seats);
                    self.observer.notify(ShopEvent::TookSeat {
                        client,
                        free_seats: seats - floor.waiting.len(),
                    });
                    loop {
                        if floor.waiting.front() == Some(&client)
                            && let Some(server) = floor.available.pop_front()
                        {
                            floor.waiting.pop_front();
                            break server;
                        }
                        floor = wait_on(&self.seat_freed, floor);
                    }
                }
            }
        } else {
            match floor.available.pop_front() {
                Some(server) => server,
                None => {
                    floor.dropoffs += 1;
                    self.observer.notify(ShopEvent::TurnedAway { client });
                    return Admission::TurnedAway;
                }
            }
        };

        // Several servers may have freed up at once; let the new queue front
        // re-check instead of waiting for the next finish_client.
        if !floor.waiting.is_empty() && !floor.available.is_empty() {
            self.seat_freed.notify_all();
        }

        floor.stations[server.index()].state = Station::Servicing(client);
        self.observer.notify(ShopEvent::Paired {
            client,
            server,
            free_seats: seats - floor.waiting.len(),
        });
        self.signals[server.index()].pairing.notify_one();
        Admission::Paired(server)
    }

    /// The client waits for its service to end, then pays and leaves.
    ///
    /// This is the only point at which a server is returned to the available
    /// queue. Fails fast with [`ShopError::NotPaired`] when `server` is not
    /// currently serving `client`.
    pub fn complete_visit(&self, client: ClientId, server: ServerId) -> Result<()> {
        let signals = self.signals_for(server)?;
        let mut floor = self.lock();

        match floor.stations[server.index()].state {
            Station::Servicing(c) | Station::AwaitingPayment(c) if c == client => {}
            _ => return Err(ShopError::NotPaired { client, server }),
        }

        self.observer.notify(ShopEvent::AwaitingFinish { client, server });
        while matches!(floor.stations[server.index()].state, Station::Servicing(_)) {
            floor = wait_on(&signals.finished, floor);
        }

        let slot = &mut floor.stations[server.index()];
        slot.state = Station::Idle;
        slot.paid = true;
        floor.available.push_back(server);
        self.observer.notify(ShopEvent::Paid { client, server });
        signals.settled.notify_one();
        Ok(())
    }

    /// The server sleeps until a client is paired to its station, then
    /// returns that client's id.
    pub fn await_client(&self, server: ServerId) -> Result<ClientId> {
        let signals = self.signals_for(server)?;
        let mut floor = self.lock();

        if floor.waiting.is_empty()
            && !matches!(floor.stations[server.index()].state, Station::Servicing(_))
        {
            self.observer.notify(ShopEvent::Sleeping { server });
        }

        let client = loop {
            if let Station::Servicing(client) = floor.stations[server.index()].state {
                break client;
            }
            floor = wait_on(&signals.pairing, floor);
        };

        self.observer.notify(ShopEvent::ServiceStarted { server, client });
        Ok(client)
    }

    /// The server declares the service done, waits for payment, then calls
    /// in the next customer.
    ///
    /// Fails fast with [`ShopError::NoClientInService`] when no client is
    /// being serviced at this station.
    pub fn finish_client(&self, server: ServerId) -> Result<()> {
        let signals = self.signals_for(server)?;
        let mut floor = self.lock();

        let client = match floor.stations[server.index()].state {
            Station::Servicing(client) => client,
            _ => return Err(ShopError::NoClientInService(server)),
        };

        self.observer.notify(ShopEvent::ServiceFinished { server, client });
        let slot = &mut floor.stations[server.index()];
        slot.state = Station::AwaitingPayment(client);
        slot.paid = false;
        signals.finished.notify_one();

        // Wait on the flag, not the state: the paying client hands this
        // server straight back to the available queue, so the station may
        // already hold the next pairing by the time we resume.
        while !floor.stations[server.index()].paid {
            floor = wait_on(&signals.settled, floor);
        }

        self.observer.notify(ShopEvent::NextCalled { server });
        self.seat_freed.notify_all();
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Floor> {
        // A poisoning panic can only originate in an observer; the floor is
        // never left mid-update, so the guard is safe to recover.
        self.floor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn signals_for(&self, server: ServerId) -> Result<&StationSignals> {
        self.signals
            .get(server.index())
            .ok_or(ShopError::UnknownServer(server))
    }
}

fn wait_on<'a>(signal: &Condvar, guard: MutexGuard<'a, Floor>) -> MutexGuard<'a, Floor> {
    signal.wait(guard).unwrap_or_else(PoisonError::into_inner)
}

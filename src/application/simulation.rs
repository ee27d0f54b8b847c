use crate::domain::ids::ClientId;
use crate::domain::shop::{Admission, Shop};
use crate::error::ShopError;
use rand::Rng;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Drives one full barbershop run.
///
/// Server threads loop `await_client` -> serve -> `finish_client` forever;
/// client threads arrive with a randomized stagger, request service once and,
/// if admitted, stay until the visit completes. `run` joins the clients only:
/// once the last client has left, the server threads are parked inside
/// `await_client` without holding any lock and die with the process.
pub struct Simulation {
    shop: Arc<Shop>,
    customers: u32,
    service_time: Duration,
}

impl Simulation {
    pub fn new(shop: Shop, customers: u32, service_time: Duration) -> Self {
        Self {
            shop: Arc::new(shop),
            customers,
            service_time,
        }
    }

    /// Runs the simulation to completion and returns the dropoff count.
    pub fn run(self) -> u64 {
        for server in self.shop.config().server_ids() {
            let shop = Arc::clone(&self.shop);
            let service_time = self.service_time;
            thread::spawn(move || {
                loop {
                    if shop.await_client(server).is_err() {
                        break;
                    }
                    thread::sleep(service_time);
                    if let Err(err) = shop.finish_client(server) {
                        eprintln!("server {server}: {err}");
                        break;
                    }
                }
            });
        }

        let mut clients = Vec::with_capacity(self.customers as usize);
        for id in 1..=self.customers {
            thread::sleep(Duration::from_micros(
                rand::thread_rng().gen_range(0..1000),
            ));
            let shop = Arc::clone(&self.shop);
            clients.push(thread::spawn(move || {
                let client = ClientId::new(id)?;
                if let Admission::Paired(server) = shop.request_service(client) {
                    shop.complete_visit(client, server)?;
                }
                Ok::<(), ShopError>(())
            }));
        }

        for handle in clients {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(err)) => eprintln!("client: {err}"),
                Err(_) => eprintln!("client thread panicked"),
            }
        }
        self.shop.dropoffs()
    }
}

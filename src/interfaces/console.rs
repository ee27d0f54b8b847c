use crate::domain::event::ShopEvent;
use crate::domain::ports::ShopObserver;

/// Prints every floor event in the classic `customer[n]` / `barber  [n]`
/// narration format.
pub struct ConsoleObserver;

impl ShopObserver for ConsoleObserver {
    fn notify(&self, event: ShopEvent) {
        match event {
            ShopEvent::TurnedAway { client } => {
                println!("customer[{client}]: leaves the shop because of no available waiting chairs.")
            }
            ShopEvent::TookSeat { client, free_seats } => {
                println!("customer[{client}]: takes a waiting chair. # waiting seats available = {free_seats}")
            }
            ShopEvent::Paired {
                client,
                server,
                free_seats,
            } => {
                println!("customer[{client}]: moves to the service chair[{server}]. # waiting seats available = {free_seats}")
            }
            ShopEvent::AwaitingFinish { client, server } => {
                println!("customer[{client}]: wait for barber[{server}] to be done with hair-cut")
            }
            ShopEvent::Paid { client, server } => {
                println!("customer[{client}]: says good-bye to barber[{server}].")
            }
            ShopEvent::Sleeping { server } => {
                println!("barber  [{server}]: sleeps because of no customers.")
            }
            ShopEvent::ServiceStarted { server, client } => {
                println!("barber  [{server}]: starts a hair-cut service for customer[{client}]")
            }
            ShopEvent::ServiceFinished { server, client } => {
                println!("barber  [{server}]: is done with the hair-cut service for customer[{client}]")
            }
            ShopEvent::NextCalled { server } => {
                println!("barber  [{server}]: calls in another customer")
            }
        }
    }
}

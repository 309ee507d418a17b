mod cycle;

pub use cycle::Poller;

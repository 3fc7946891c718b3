#[cfg(feature = "data")]
pub mod client;
pub use client::Bar;
pub use client::Client;
pub use client::Error;
pub use client::Interface;
pub use client::MockInterface;
pub use client::PriceHistory;

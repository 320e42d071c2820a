pub mod channel;
pub mod config;
pub mod error;
pub mod fetch;
pub mod render;

pub use channel::{Channel, Collection, Links};
pub use config::{Config, DEFAULT_CHANNEL, DEFAULT_CHANNELS_URL};
pub use error::{CrierError, Result};
pub use fetch::ChannelClient;
pub use render::LinkStyle;

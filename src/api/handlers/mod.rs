//! API HTTP handlers.

mod forecast;
mod identity;
mod lookup;
mod proxy;

pub use forecast::forecast_handler;
pub use identity::private_handler;
pub use lookup::url_handler;
pub use proxy::proxy_handler;

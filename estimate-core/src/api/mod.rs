pub mod gateway;
pub mod image_cache;

pub use gateway::{GatewayError, OrderConfirmation, OrderGateway};
pub use image_cache::{Clock, ImageCache, SystemClock};

//! Redis backend for [`biotope_state::StateStore`].
//!
//! Values are plain Redis strings; expiry is delegated to Redis via
//! `SET ... PX`, so expired records disappear without any sweeper.

pub mod config;
pub mod key_render;
pub mod store;

pub use config::RedisConfig;
pub use store::RedisStateStore;

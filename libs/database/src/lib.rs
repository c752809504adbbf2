//! MongoDB connectivity for the workspace's services.
//!
//! # Features
//!
//! - `mongodb` (default) - driver integration and connection helpers
//! - `config` - load [`mongodb::MongoConfig`] from the environment
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let collection = client.database("mydb").collection::<Document>("product");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

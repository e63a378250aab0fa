//! Data access for the showcase backend: the [`ProjectSource`] contract, its
//! HTTP and file implementations, and the [`RecordStore`] that keeps the latest
//! snapshot for the discovery engine.

pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod session;
pub mod source;
pub mod store;

pub use config::ClientConfig;
pub use error::Result;
pub use error::SourceError;
pub use file::FileProjectSource;
pub use http::HttpProjectSource;
pub use session::Session;
pub use source::ProjectSource;
pub use store::RecordStore;
pub use store::RefreshOutcome;
pub use store::Snapshot;

pub mod context;
pub mod credentials;
pub mod error;
pub mod policy;
pub mod records;
pub mod repository;
pub mod settings;
pub mod store;

pub use context::RequestContext;
pub use error::{HostelError, Result};
pub use policy::{Action, Role};
pub use credentials::CredentialStore;
pub use repository::Repositories;

//! Login flow logic shared by the server render and the browser bundle

pub mod client;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod login;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod storage;
pub mod token;

pub use client::{AuthClient, submit_login};
pub use error::{INVALID_CREDENTIALS_MESSAGE, LoginError, StorageError};
pub use login::{
    Credentials, DASHBOARD_PATH, LOGIN_ENDPOINT, LoginField, LoginPhase, LoginSettings, LoginState,
    SubmitPolicy, SubmitTicket, Transition,
};
pub use storage::{KeyValueStore, MemoryStore, TOKEN_KEY, persist_token};
pub use token::{AccessToken, parse_token_response};

//! Client API
//!
//! The composed clients built on the network and router layers: the generic
//! [`ChatClient`], the two role specializations, and the factory that
//! constructs them.

mod chat_client;
mod factory;
mod roles;

pub use chat_client::ChatClient;
pub use factory::ClientFactory;
pub use roles::{
    ClientSimulator, OperatorConsole, OperatorHandlers, SimulatorHandlers, DEFAULT_ADMIN_NAME,
    DEFAULT_HISTORY_LIMIT, OPERATOR_CONNECTION_ID,
};

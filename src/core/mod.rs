pub mod gateway;
pub mod repository;

pub use crate::domain::entity::{Entity, Item};
pub use crate::domain::model::{Book, Employee, Shift};
pub use crate::domain::ports::{Handler, ItemStore};
pub use crate::utils::error::Result;
pub use gateway::{GatewayRequest, GatewayResponse};
pub use repository::Repository;

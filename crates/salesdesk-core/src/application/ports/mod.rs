pub mod output;

pub use output::{DepartmentGateway, GatewayResult, PersistenceError, SellerGateway};

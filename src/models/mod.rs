mod criteria;
mod results;
mod vehicle;

pub use criteria::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, VehicleCriteria};
pub use results::Results;
pub use vehicle::Vehicle;
pub(crate) use vehicle::fold_case;

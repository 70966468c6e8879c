//! Task instance port
//!
//! The task-instantiation engine hands its task instances to
//! [`BoundDataService::bind`](crate::entities::BoundDataService::bind)
//! through this contract.

use crate::value_objects::ModelId;

/// A concrete task instance, as seen by service binding
pub trait TaskInstance {
    /// Instance name, used in error messages
    fn name(&self) -> &str;

    /// Runtime model of the instance
    fn model(&self) -> ModelId;
}

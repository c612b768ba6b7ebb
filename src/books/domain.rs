use crate::core::domain::Identifiable;

pub mod model;
pub mod validation;

pub(crate) trait Book: Identifiable {
    fn rating(&self) -> i64;
    fn published_date(&self) -> i64;
}

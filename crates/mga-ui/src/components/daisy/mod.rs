//! DaisyUI-styled wrappers used by the catalog views.

pub(crate) mod badge;
pub(crate) mod foundations;
pub(crate) mod pagination;

pub(crate) use badge::Badge;
pub(crate) use foundations::{DaisyColor, DaisySize};
pub(crate) use pagination::Pagination;

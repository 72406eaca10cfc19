pub(crate) mod colleges;
pub(crate) mod dashboard;
pub(crate) mod members;
pub(crate) mod organizations;
pub(crate) mod programs;
pub(crate) mod students;
pub(crate) mod support;

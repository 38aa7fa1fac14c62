pub mod company;
pub mod document;
pub mod employee;
pub mod roles;

pub mod accounts;
pub mod destinations;
pub mod incoming_data;

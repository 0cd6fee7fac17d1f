pub mod customer;
pub mod employee;
pub mod preference;
pub mod promo_code;
pub mod role;

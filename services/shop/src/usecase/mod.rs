pub mod access;
pub mod assembly;
pub mod checkout;
pub mod confirm;
pub mod passcode;
pub mod pricing;
pub mod product;

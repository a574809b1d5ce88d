//! Donations module - the gift ledger and its services.

mod donations_model;
mod donations_service;
mod donations_traits;


// Re-export the public interface
pub use donations_model::{Donation, DonationUpdate, NewDonation};
pub use donations_service::DonationService;
pub use donations_traits::{DonationRepositoryTrait, DonationServiceTrait};

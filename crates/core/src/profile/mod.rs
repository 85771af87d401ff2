//! User profile - income and the share of it allocated to debt repayment.

mod profile_model;

pub use profile_model::UserProfile;

pub mod beam;
pub mod choice;
pub mod common;
pub mod dibh;
pub mod hdr;
pub mod pacemaker;
pub mod prior_dose;
pub mod request;
pub mod sbrt;
pub mod srs;
pub mod tbi;

pub mod dibh;
pub mod hdr;
pub mod pacemaker;
pub mod prior_dose;
pub mod sbrt;
pub mod srs;
pub mod tbi;

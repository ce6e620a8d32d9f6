//! One generator per modality. Each validates its payload into a plan,
//! then assembles introduction, treatment and closing paragraphs.

pub mod dibh;
pub mod hdr;
pub mod pacemaker;
pub mod prior_dose;
pub mod sbrt;
pub mod srs;
pub mod tbi;

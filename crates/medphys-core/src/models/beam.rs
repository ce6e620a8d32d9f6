use super::choice::ChoiceValue;

/// Photon beam energies offered by the treatment machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamEnergy {
    Mv6,
    Mv10,
    Mv15,
    Mv18,
}

impl BeamEnergy {
    pub fn megavoltage(self) -> u32 {
        match self {
            BeamEnergy::Mv6 => 6,
            BeamEnergy::Mv10 => 10,
            BeamEnergy::Mv15 => 15,
            BeamEnergy::Mv18 => 18,
        }
    }

    /// Beams above 10 MV produce photoneutrons.
    pub fn produces_neutrons(self) -> bool {
        self.megavoltage() > 10
    }
}

impl ChoiceValue for BeamEnergy {
    const ALL: &'static [Self] = &[
        BeamEnergy::Mv6,
        BeamEnergy::Mv10,
        BeamEnergy::Mv15,
        BeamEnergy::Mv18,
    ];

    fn label(self) -> &'static str {
        match self {
            BeamEnergy::Mv6 => "6 MV",
            BeamEnergy::Mv10 => "10 MV",
            BeamEnergy::Mv15 => "15 MV",
            BeamEnergy::Mv18 => "18 MV",
        }
    }
}

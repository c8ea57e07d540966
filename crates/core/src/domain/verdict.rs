// Probe verdict and failure taxonomy

/// Why the facility was judged unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Probe could not open its own source (environment broken)
    Environment,
    /// Poll primitive returned its error sentinel
    Facility,
    /// Poll succeeded but reported something other than exactly the request
    SemanticMismatch,
}

/// Outcome of one probe run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeVerdict {
    Usable,
    Unusable(FailureKind),
}

impl ProbeVerdict {
    /// Process exit status: 0 = usable, 1 = absent / broken / imitation
    pub fn exit_status(self) -> u8 {
        match self {
            ProbeVerdict::Usable => 0,
            ProbeVerdict::Unusable(_) => 1,
        }
    }
}

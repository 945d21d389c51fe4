//! Reshapes one enumeration batch into typed candidate records

use netcoresearch_hostfxr::EnvironmentBatch;

use crate::target::Target;

/// One installed entry, borrowed from its batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    Sdk { version: &'a str },
    Framework { name: &'a str, version: &'a str },
}

impl<'a> Candidate<'a> {
    pub fn raw_version(&self) -> &'a str {
        match *self {
            Candidate::Sdk { version } => version,
            Candidate::Framework { version, .. } => version,
        }
    }
}

/// All entries of `batch`, with the kind `target` looks for first.
///
/// Nothing is filtered here; the selector decides what to skip.
pub fn candidates<'a>(batch: &'a EnvironmentBatch, target: &Target) -> Box<dyn Iterator<Item = Candidate<'a>> + 'a> {
    let sdks = batch.sdks.iter().map(|sdk| Candidate::Sdk { version: &sdk.version });
    let frameworks = batch.frameworks.iter().map(|framework| Candidate::Framework {
        name: &framework.name,
        version: &framework.version,
    });

    match target {
        Target::Sdk => Box::new(sdks.chain(frameworks)),
        Target::Framework(_) => Box::new(frameworks.chain(sdks)),
    }
}

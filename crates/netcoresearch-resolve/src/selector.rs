//! Best-version selection over one batch of candidates

use std::cmp::Ordering;

use crate::candidate::Candidate;
use crate::error::Result;
use crate::target::{ResolveRequest, Target};
use crate::value::VersionValue;

/// Keeps the highest version seen so far for one request.
///
/// Candidates of the wrong kind or name are skipped before parsing. A parse
/// or compare failure aborts the whole selection and drops the best value
/// held so far. On equal versions the first one seen is kept.
pub struct Selector<'r, V> {
    target: &'r Target,
    major: u32,
    best: Option<V>,
}

impl<'r, V: VersionValue> Selector<'r, V> {
    pub fn new(request: &'r ResolveRequest) -> Self {
        Self {
            target: &request.target,
            major: request.major,
            best: None,
        }
    }

    /// Run the selection over `candidates` in order
    pub fn select<'a, I>(mut self, candidates: I) -> Result<Option<V>>
    where
        I: IntoIterator<Item = Candidate<'a>>,
    {
        for candidate in candidates {
            self.visit(candidate)?;
        }
        Ok(self.best)
    }

    fn visit(&mut self, candidate: Candidate<'_>) -> Result<()> {
        let raw = match candidate {
            Candidate::Sdk { version } if *self.target == Target::Sdk => version,
            Candidate::Framework { name, version } if self.target.matches_framework(name) => version,
            _ => return Ok(()),
        };

        let version = V::parse(raw)?;
        if version.major() != self.major {
            log::trace!("Skipping {} (major {} != {})", raw, version.major(), self.major);
            return Ok(());
        }

        if let Some(best) = &self.best {
            if best.try_compare(&version)? != Ordering::Less {
                log::trace!("Skipping {} (not newer than current best)", raw);
                return Ok(());
            }
        }

        log::trace!("Selecting {}", raw);
        self.best = Some(version);
        Ok(())
    }
}

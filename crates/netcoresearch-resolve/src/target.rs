use std::fmt;

/// What a resolution looks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Any installed SDK
    Sdk,
    /// One shared framework, matched by name case-insensitively
    Framework(String),
}

impl Target {
    /// `sdk` in any casing selects SDKs, anything else names a framework
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("sdk") {
            Target::Sdk
        } else {
            Target::Framework(name.to_string())
        }
    }

    /// Whether a framework entry named `name` belongs to this target
    pub fn matches_framework(&self, name: &str) -> bool {
        match self {
            Target::Sdk => false,
            Target::Framework(wanted) => eq_ignore_case(wanted, name),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Sdk => f.write_str("sdk"),
            Target::Framework(name) => f.write_str(name),
        }
    }
}

/// One resolve call: the target and the major version it must carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub target: Target,
    pub major: u32,
}

impl ResolveRequest {
    pub fn new(target: Target, major: u32) -> Self {
        Self { target, major }
    }

    pub fn sdk(major: u32) -> Self {
        Self::new(Target::Sdk, major)
    }

    pub fn framework(name: impl Into<String>, major: u32) -> Self {
        Self::new(Target::Framework(name.into()), major)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

use crate::constants::{COMPUTE_GROUP, SCHEDULING, VM_SIZES};
use bitflags::bitflags;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Represents a set of feature areas.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AreaSet: u32 {
        const COMPUTE_GROUP = 1 << 0;
        const SCHEDULING = 1 << 1;
        const VM_SIZES = 1 << 2;

        const ALL = Self::COMPUTE_GROUP.bits() | Self::SCHEDULING.bits() | Self::VM_SIZES.bits();
    }
}

const NAMED: [(&str, AreaSet); 3] = [
    (COMPUTE_GROUP, AreaSet::COMPUTE_GROUP),
    (SCHEDULING, AreaSet::SCHEDULING),
    (VM_SIZES, AreaSet::VM_SIZES),
];

impl AreaSet {
    /// Canonical names of every single area contained in the set, in declaration order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        NAMED.iter().filter(|(_, area)| self.contains(*area)).map(|(name, _)| *name).collect()
    }
}

impl From<&str> for AreaSet {
    fn from(s: &str) -> Self {
        match s {
            COMPUTE_GROUP => Self::COMPUTE_GROUP,
            SCHEDULING => Self::SCHEDULING,
            VM_SIZES => Self::VM_SIZES,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl Serialize for AreaSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.names())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AreaNames {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for AreaSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = match AreaNames::deserialize(deserializer)? {
            AreaNames::One(name) => vec![name],
            AreaNames::Many(names) => names,
        };

        names.iter().try_fold(Self::empty(), |acc, name| {
            let area = Self::from(name.as_str());
            if area.is_empty() {
                return Err(D::Error::custom(format!("unknown feature area '{name}'")));
            }
            Ok(acc | area)
        })
    }
}

/// Reactor configuration groups
/// The three cooling options differ only in which derating they apply

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GroupId {
    A1,
    A2,
    B,
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupId::A1 => "A1",
            GroupId::A2 => "A2",
            GroupId::B => "B",
        };
        f.write_str(name)
    }
}

impl FromStr for GroupId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A1" => Ok(GroupId::A1),
            "A2" => Ok(GroupId::A2),
            "B" => Ok(GroupId::B),
            other => Err(format!("unknown group {other:?}, expected A1, A2 or B")),
        }
    }
}

/// Which derating steps a group run applies
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSpec {
    pub id: GroupId,
    pub title: &'static str,
    /// Per-month hydrological derating, applied to every trial
    pub apply_month_derating: bool,
    /// Scalar thermal derating, applied to the reduced P5 curve
    pub apply_thermal_factor: bool,
}

impl GroupSpec {
    pub fn for_id(id: GroupId) -> Self {
        match id {
            GroupId::A1 => GroupSpec {
                id,
                title: "freshwater-cooled SMR",
                apply_month_derating: true,
                apply_thermal_factor: false,
            },
            GroupId::A2 => GroupSpec {
                id,
                title: "seawater-cooled SMR",
                apply_month_derating: false,
                apply_thermal_factor: true,
            },
            GroupId::B => GroupSpec {
                id,
                title: "non-water-cooled SMR",
                apply_month_derating: false,
                apply_thermal_factor: false,
            },
        }
    }

    /// A1, A2 and B, in reporting order
    pub fn all() -> Vec<GroupSpec> {
        [GroupId::A1, GroupId::A2, GroupId::B].into_iter().map(GroupSpec::for_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_group_applies_one_kind_of_derating_at_most() {
        let groups = GroupSpec::all();

        assert_eq!(groups.len(), 3);
        assert!(groups[0].apply_month_derating && !groups[0].apply_thermal_factor);
        assert!(!groups[1].apply_month_derating && groups[1].apply_thermal_factor);
        assert!(!groups[2].apply_month_derating && !groups[2].apply_thermal_factor);
    }

    #[test]
    fn test_group_ids_parse_case_insensitively() {
        assert_eq!("a1".parse::<GroupId>(), Ok(GroupId::A1));
        assert_eq!("B".parse::<GroupId>(), Ok(GroupId::B));
        assert!("C".parse::<GroupId>().is_err());
        assert_eq!(GroupId::A2.to_string(), "A2");
    }
}

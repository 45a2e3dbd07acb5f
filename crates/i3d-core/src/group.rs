//! Namelist sections.

use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// A namelist section. Declaration order is serialization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    /// `&BasicParam`: mesh, domain, boundary conditions, time stepping.
    BasicParam,
    /// `&NumOptions`: numerical schemes.
    NumOptions,
    /// `&InOutParam`: restart and output frequencies.
    InOutParam,
    /// `&ScalarParam`: passive scalar properties.
    ScalarParam,
    /// `&LESModel`: large-eddy simulation model.
    LesModel,
    /// `&ibmstuff`: immersed boundary method.
    IbmStuff,
}

impl Group {
    /// Every group, in serialization order.
    pub const ALL: [Group; 6] = [
        Group::BasicParam,
        Group::NumOptions,
        Group::InOutParam,
        Group::ScalarParam,
        Group::LesModel,
        Group::IbmStuff,
    ];

    /// Section name as written after `&`.
    pub fn section_name(self) -> &'static str {
        match self {
            Self::BasicParam => "BasicParam",
            Self::NumOptions => "NumOptions",
            Self::InOutParam => "InOutParam",
            Self::ScalarParam => "ScalarParam",
            Self::LesModel => "LESModel",
            Self::IbmStuff => "ibmstuff",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_name())
    }
}

impl FromStr for Group {
    type Err = LookupError;

    /// Section names are matched case-insensitively, as Fortran does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.section_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LookupError {
                name: s.to_string(),
            })
    }
}

use std::ops::{BitOr, BitOrAssign};

use clap::ValueEnum;
use serde::Deserialize;

/// A coverage report format understood by minicover
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Print coverage results to the console
    Console,
    /// HTML report directory
    Html,
    /// Plain XML report
    Xml,
    /// NCover-compatible XML report
    #[value(name = "ncover")]
    NCover,
    /// OpenCover-compatible XML report
    #[value(name = "opencover")]
    OpenCover,
    /// Publish results to coveralls.io
    Coveralls,
}

/// Per-kind invocation metadata
#[derive(Debug, Clone, Copy)]
pub struct ReportMeta {
    /// Subcommand the external tool expects for this kind
    pub subcommand: &'static str,
    /// Suffix appended to the report prefix for `--output`
    pub output_suffix: Option<&'static str>,
    /// Whether the subcommand accepts `--threshold`
    pub supports_threshold: bool,
}

impl ReportKind {
    /// All kinds in declaration order; report dispatch follows this order
    pub const ALL: [Self; 6] = [
        Self::Console,
        Self::Html,
        Self::Xml,
        Self::NCover,
        Self::OpenCover,
        Self::Coveralls,
    ];

    const fn mask(self) -> u8 {
        1 << self as u8
    }

    pub const fn metadata(self) -> ReportMeta {
        match self {
            Self::Console => ReportMeta {
                subcommand: "report",
                output_suffix: None,
                supports_threshold: true,
            },
            Self::Html => ReportMeta {
                subcommand: "htmlreport",
                output_suffix: Some("-html"),
                supports_threshold: true,
            },
            Self::Xml => ReportMeta {
                subcommand: "xmlreport",
                output_suffix: Some(".xml"),
                supports_threshold: true,
            },
            Self::NCover => ReportMeta {
                subcommand: "xmlreport",
                output_suffix: Some("-ncover.xml"),
                supports_threshold: true,
            },
            Self::OpenCover => ReportMeta {
                subcommand: "opencoverreport",
                output_suffix: Some("-opencover.xml"),
                supports_threshold: true,
            },
            Self::Coveralls => ReportMeta {
                subcommand: "coverallsreport",
                output_suffix: None,
                supports_threshold: false,
            },
        }
    }
}

/// The set of requested report kinds.
///
/// The mask carries no ordering information; iteration always yields kinds in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTypes(u8);

impl ReportTypes {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, kind: ReportKind) -> bool {
        self.0 & kind.mask() != 0
    }

    pub fn insert(&mut self, kind: ReportKind) {
        self.0 |= kind.mask();
    }

    /// Iterates the requested kinds in declaration order
    pub fn iter(self) -> impl Iterator<Item = ReportKind> {
        ReportKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl Default for ReportTypes {
    fn default() -> Self {
        ReportKind::Console.into()
    }
}

impl From<ReportKind> for ReportTypes {
    fn from(kind: ReportKind) -> Self {
        Self(kind.mask())
    }
}

impl FromIterator<ReportKind> for ReportTypes {
    fn from_iter<I: IntoIterator<Item = ReportKind>>(kinds: I) -> Self {
        let mut types = Self::empty();
        for kind in kinds {
            types.insert(kind);
        }
        types
    }
}

impl BitOr for ReportTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<ReportKind> for ReportTypes {
    type Output = Self;

    fn bitor(self, rhs: ReportKind) -> Self {
        Self(self.0 | rhs.mask())
    }
}

impl BitOr for ReportKind {
    type Output = ReportTypes;

    fn bitor(self, rhs: Self) -> ReportTypes {
        ReportTypes(self.mask() | rhs.mask())
    }
}

impl BitOrAssign<ReportKind> for ReportTypes {
    fn bitor_assign(&mut self, rhs: ReportKind) {
        self.insert(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_console_only() {
        let types = ReportTypes::default();
        assert!(types.contains(ReportKind::Console));
        assert_eq!(types.iter().count(), 1);
    }

    #[test]
    fn test_bitor_composition() {
        let types = ReportKind::Console | ReportKind::Xml | ReportKind::Coveralls;
        assert!(types.contains(ReportKind::Console));
        assert!(types.contains(ReportKind::Xml));
        assert!(types.contains(ReportKind::Coveralls));
        assert!(!types.contains(ReportKind::Html));
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let types = ReportKind::Coveralls | ReportKind::Console | ReportKind::Html;
        let kinds: Vec<_> = types.iter().collect();
        assert_eq!(
            kinds,
            vec![ReportKind::Console, ReportKind::Html, ReportKind::Coveralls]
        );
    }

    #[test]
    fn test_masks_are_distinct() {
        let mut combined = ReportTypes::empty();
        for kind in ReportKind::ALL {
            assert!(!combined.contains(kind));
            combined.insert(kind);
        }
        assert_eq!(combined.iter().count(), ReportKind::ALL.len());
    }

    #[test]
    fn test_metadata_table() {
        assert_eq!(ReportKind::Console.metadata().subcommand, "report");
        assert!(ReportKind::Console.metadata().output_suffix.is_none());

        assert_eq!(ReportKind::Html.metadata().subcommand, "htmlreport");
        assert_eq!(ReportKind::Html.metadata().output_suffix, Some("-html"));

        assert_eq!(ReportKind::Xml.metadata().subcommand, "xmlreport");
        assert_eq!(ReportKind::Xml.metadata().output_suffix, Some(".xml"));

        assert_eq!(ReportKind::NCover.metadata().subcommand, "xmlreport");
        assert_eq!(
            ReportKind::NCover.metadata().output_suffix,
            Some("-ncover.xml")
        );

        assert_eq!(
            ReportKind::OpenCover.metadata().subcommand,
            "opencoverreport"
        );
        assert_eq!(
            ReportKind::OpenCover.metadata().output_suffix,
            Some("-opencover.xml")
        );

        assert_eq!(
            ReportKind::Coveralls.metadata().subcommand,
            "coverallsreport"
        );
        assert!(!ReportKind::Coveralls.metadata().supports_threshold);
        assert!(ReportKind::Xml.metadata().supports_threshold);
    }
}

//! Artifact file names, shared by every backend.

use cts_core::{Platform, Tier};

use crate::series::{BucketBreakdown, BucketKind};

pub fn tier_migration_file(extension: &str) -> String {
    format!("Tier_Migration.{extension}")
}

pub fn breakdown_file(kind: BucketKind, tier: Tier, platform: Platform, extension: &str) -> String {
    format!(
        "{}_{}_{}.{extension}",
        tier.file_stem(),
        platform.name(),
        kind.file_suffix()
    )
}

impl BucketBreakdown {
    pub fn file_name(&self, extension: &str) -> String {
        breakdown_file(self.kind, self.tier, self.platform, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_have_no_spaces() {
        assert_eq!(tier_migration_file("png"), "Tier_Migration.png");
        assert_eq!(
            breakdown_file(BucketKind::Intermittents, Tier::Tier2, Platform::MacOs, "svg"),
            "Tier_2_MacOs_intermittents.svg"
        );
        assert_eq!(
            breakdown_file(BucketKind::Passing, Tier::Tier3, Platform::Windows, "png"),
            "Tier_3_Windows_passing.png"
        );
    }
}

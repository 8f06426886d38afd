/// How violations of non-enforced rules affect the outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdvisoryMode {
    /// Every active rule gates `passes`, enforced or not.
    #[default]
    Block,
    /// Non-enforced rules are reported as advisories and never fail validation.
    Report,
}

impl AdvisoryMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "block" => Some(AdvisoryMode::Block),
            "report" => Some(AdvisoryMode::Report),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdvisoryMode::Block => "block",
            AdvisoryMode::Report => "report",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub advisory: AdvisoryMode,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "strict".to_string(),
            advisory: AdvisoryMode::Block,
        }
    }
}

impl EffectiveConfig {
    /// Whether a violation of this rule gates `passes`.
    pub fn blocks(&self, enforced: bool) -> bool {
        enforced || self.advisory == AdvisoryMode::Block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_mode_gates_every_rule() {
        let cfg = EffectiveConfig::default();
        assert!(cfg.blocks(true));
        assert!(cfg.blocks(false));
    }

    #[test]
    fn report_mode_only_gates_enforced_rules() {
        let cfg = EffectiveConfig {
            profile: "lenient".to_string(),
            advisory: AdvisoryMode::Report,
        };
        assert!(cfg.blocks(true));
        assert!(!cfg.blocks(false));
    }

    #[test]
    fn advisory_mode_parses_known_names() {
        assert_eq!(AdvisoryMode::parse("block"), Some(AdvisoryMode::Block));
        assert_eq!(AdvisoryMode::parse("report"), Some(AdvisoryMode::Report));
        assert_eq!(AdvisoryMode::parse("warn"), None);
        assert_eq!(AdvisoryMode::Report.as_str(), "report");
    }
}

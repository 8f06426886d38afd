use artifactflow_domain::policy::{AdvisoryMode, EffectiveConfig};

/// Named profiles. `None` for anything unknown.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "strict" => Some(strict_profile()),
        "lenient" => Some(lenient_profile()),
        _ => None,
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        advisory: AdvisoryMode::Block,
    }
}

// Non-enforced mappings only annotate the response.
fn lenient_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "lenient".to_string(),
        advisory: AdvisoryMode::Report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_profiles() {
        assert_eq!(preset("strict").map(|c| c.advisory), Some(AdvisoryMode::Block));
        assert_eq!(preset("lenient").map(|c| c.advisory), Some(AdvisoryMode::Report));
        assert!(preset("warn").is_none());
    }
}

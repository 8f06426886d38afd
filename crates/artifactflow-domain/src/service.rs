use crate::engine::evaluate;
use crate::environment::active_rules_for;
use crate::error::EngineError;
use crate::policy::EffectiveConfig;
use crate::report::ValidationOutcome;
use crate::store::{RecordStore, RuleStore};
use artifactflow_types::{ValidationRequest, ValidationResponse};

#[derive(Clone, Debug, PartialEq)]
pub struct RecordValidation {
    pub response: ValidationResponse,
    pub outcome: ValidationOutcome,
}

/// Fetch the artifact, select the rules active for the environment and validate.
///
/// Only store-level problems (missing artifact, dangling mapping, backend failure)
/// are errors; everything the rules find is part of the outcome.
pub fn validate_record_for_environment<S>(
    store: &S,
    request: &ValidationRequest,
    cfg: &EffectiveConfig,
) -> Result<RecordValidation, EngineError>
where
    S: RuleStore + RecordStore + ?Sized,
{
    let artifact = store
        .fetch_record(&request.artifact_id)?
        .ok_or_else(|| EngineError::RecordNotFound(request.artifact_id.clone()))?;

    let active = active_rules_for(store, &request.environment)?;
    let outcome = evaluate(&artifact, &active, cfg);

    tracing::info!(
        target: "artifactflow::engine",
        artifact = %request.artifact_id,
        environment = %request.environment,
        rules = outcome.rules_evaluated,
        limits = outcome.limits_evaluated,
        violations = outcome.violations.len(),
        advisories = outcome.advisories.len(),
        passes = outcome.passes,
        "artifact validated"
    );

    Ok(RecordValidation {
        response: outcome.to_response(&request.artifact_id, &request.environment),
        outcome,
    })
}

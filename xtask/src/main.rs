//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Kept out of the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Project root (parent of the xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        match manifest_dir.parent() {
            Some(parent) => Ok(parent.to_path_buf()),
            None => bail!("xtask has no parent directory"),
        }
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(artifactflow_types::ValidationReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(artifactflow_settings::ArtifactflowConfigV1)
}

fn generate_snapshot_schema() -> schemars::Schema {
    schema_for!(artifactflow_store::Snapshot)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "artifactflow.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "artifactflow.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "artifactflow.snapshot.v1.json",
            generate: generate_snapshot_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture reports and snapshots under tests/fixtures");
    eprintln!("  explain-coverage  Validate all codes have explanations");
}

/// Codes are lowercase snake_case tokens.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn compile(schema: schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema to JSON")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn schema_errors(validator: &jsonschema::Validator, value: &serde_json::Value) -> Vec<String> {
    validator.iter_errors(value).map(|e| e.to_string()).collect()
}

/// Validate every fixture directory under tests/fixtures.
///
/// This checks:
/// 1. `expected.report.json` validates against the generated report schema
/// 2. Every finding code is a known token with an explanation
/// 3. `store.json` loads without dangling mappings
fn conform() -> anyhow::Result<()> {
    let report_schema = compile(generate_report_schema())?;
    println!("✓ report schema compiles");

    let dir = fixtures_dir()?;
    if !dir.exists() {
        bail!("tests/fixtures/ not found at {}", dir.display());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    entries.sort();

    let mut errors = Vec::new();
    for fixture in &entries {
        let name = fixture
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let report_path = fixture.join("expected.report.json");
        if report_path.exists() {
            let report = read_json(&report_path)?;
            for err in schema_errors(&report_schema, &report) {
                errors.push(format!("{name}/expected.report.json: {err}"));
            }
            let findings = report["findings"].as_array().cloned().unwrap_or_default();
            for finding in findings {
                let code = finding["code"].as_str().unwrap_or_default();
                if !is_valid_token(code) {
                    errors.push(format!("{name}: invalid code token '{code}'"));
                } else if artifactflow_types::explain::lookup_explanation(code).is_none() {
                    errors.push(format!("{name}: code '{code}' has no explanation"));
                }
            }
        }

        let store_path = fixture.join("store.json");
        if store_path.exists() {
            let text = fs::read_to_string(&store_path)
                .with_context(|| format!("Failed to read {}", store_path.display()))?;
            if let Err(err) = artifactflow_store::fuzz::load_snapshot_str(&text) {
                errors.push(format!("{name}/store.json: {err:#}"));
            }
        }

        println!("  checked {}", name);
    }

    if errors.is_empty() {
        println!("\n✓ {} fixtures conform", entries.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn explain_coverage() -> anyhow::Result<()> {
    let codes = artifactflow_types::explain::all_codes();
    let mut errors = Vec::new();

    for code in codes {
        if !is_valid_token(code) {
            errors.push(format!("Code '{}' is not a snake_case token", code));
        }
        match artifactflow_types::explain::lookup_explanation(code) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Code '{}' has empty title", code));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Code '{}' has empty description", code));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Code '{}' has empty remediation", code));
                }
            }
            None => errors.push(format!("Code '{}' has no explanation", code)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

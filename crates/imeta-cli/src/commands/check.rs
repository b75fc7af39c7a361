use std::path::{Path, PathBuf};

use imeta_enforce::types::CheckResult;
use imeta_output::OutputFormatter;
use imeta_registry::{manifest, InterfaceRegistry, RegistryError};

use super::sources::{load_defaults, manifest_files};

/// Run `imeta check <paths>` -- register every manifest and report conformance violations.
///
/// Exit 0 when clean, 1 on errors (or warnings under `--strict`), 2 when a
/// manifest cannot be read or registered.
pub fn run(
    formatter: &dyn OutputFormatter,
    config: Option<&Path>,
    paths: Vec<PathBuf>,
    strict: bool,
    raise: bool,
) -> i32 {
    let defaults = load_defaults(config);
    let files = match manifest_files(&paths) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("imeta check: {}", e);
            return 2;
        }
    };

    let mut result = CheckResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "check".to_string(),
        status: "ok".to_string(),
        sources: Vec::with_capacity(files.len()),
        classes_checked: Vec::new(),
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    for file in &files {
        let manifest = match manifest::load(file) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("imeta check: {}", e);
                return 2;
            }
        };
        let mut settings = manifest.config(&defaults);
        if raise {
            settings.raise_on_violation = true;
        }
        let decls = match manifest.into_decls() {
            Ok(d) => d,
            Err(e) => {
                eprintln!("imeta check: {}: {}", file.display(), e);
                return 2;
            }
        };

        result.sources.push(file.display().to_string());
        let mut registry = InterfaceRegistry::with_defaults(settings);
        for decl in decls {
            let name = decl.name.clone();
            match registry.register(decl) {
                Ok(registration) => {
                    result.classes_checked.push(registration.class);
                    result.warnings.extend(registration.violations);
                }
                Err(RegistryError::Conformance(e)) => {
                    // later classes may depend on the rejected one
                    tracing::debug!(class = %name, file = %file.display(), "registration rejected");
                    result.classes_checked.push(name);
                    result.errors.push(e.violation().clone());
                    break;
                }
                Err(e) => {
                    eprintln!("imeta check: {}: {}", file.display(), e);
                    return 2;
                }
            }
        }
    }

    result.status = if !result.errors.is_empty() {
        "error"
    } else if !result.warnings.is_empty() {
        "warning"
    } else {
        "ok"
    }
    .to_string();

    let output = formatter.format_check(&result);
    if !output.is_empty() {
        print!("{}", output);
    }

    if !result.errors.is_empty() || (strict && !result.warnings.is_empty()) {
        1
    } else {
        0
    }
}

use imeta_core::types::Signature;
use imeta_enforce::conformance::compatible;
use imeta_enforce::types::CompatResult;
use imeta_output::OutputFormatter;

/// Run `imeta compat <candidate> <reference>`.
///
/// Exit 0 when compatible, 1 when not, 2 when a signature does not parse.
pub fn run(formatter: &dyn OutputFormatter, candidate: &str, reference: &str) -> i32 {
    let parse = |label: &str, text: &str| -> Option<Signature> {
        match text.parse::<Signature>() {
            Ok(sig) => Some(sig),
            Err(e) => {
                eprintln!("imeta compat: invalid {} signature: {}", label, e);
                None
            }
        }
    };
    let (Some(cand), Some(refr)) = (parse("candidate", candidate), parse("reference", reference))
    else {
        return 2;
    };

    let result = CompatResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "compat".to_string(),
        candidate: cand.to_string(),
        reference: refr.to_string(),
        compatible: compatible(&cand, &refr),
    };
    print!("{}", formatter.format_compat(&result));

    if result.compatible {
        0
    } else {
        1
    }
}

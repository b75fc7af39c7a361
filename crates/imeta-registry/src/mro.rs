//! C3 linearization.

use crate::error::RegistryError;

/// Method resolution order of a new class `name` with the given direct
/// `bases`, where `base_mros[i]` is the already linearized MRO of `bases[i]`.
///
/// The result starts with `name`, preserves each base's own order and the
/// declaration order of the bases, and fails when no order satisfies both.
pub fn linearize(
    name: &str,
    bases: &[String],
    base_mros: &[&[String]],
) -> Result<Vec<String>, RegistryError> {
    let mut sequences: Vec<Vec<&str>> = base_mros
        .iter()
        .map(|mro| mro.iter().map(String::as_str).collect())
        .collect();
    sequences.push(bases.iter().map(String::as_str).collect());

    let mut result = vec![name.to_string()];
    loop {
        sequences.retain(|s| !s.is_empty());
        if sequences.is_empty() {
            return Ok(result);
        }

        let head = sequences
            .iter()
            .map(|s| s[0])
            .find(|candidate| !sequences.iter().any(|s| s[1..].contains(candidate)))
            .ok_or_else(|| RegistryError::InconsistentMro {
                class: name.to_string(),
                bases: bases.to_vec(),
            })?;

        result.push(head.to_string());
        for s in &mut sequences {
            if s[0] == head {
                s.remove(0);
            }
        }
    }
}

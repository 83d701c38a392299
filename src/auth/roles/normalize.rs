//! Role display-name normalization
//!
//! Display names arrive in Spanish with accents and arbitrary spacing
//! (`"Director de Investigación"`). UI code references roles through stable
//! ASCII keys (`"DIRECTOR_DE_INVESTIGACION"`), so both sides must agree on one
//! deterministic transformation. Any change here silently breaks every role
//! constant in the console.

/// Normalize a role display name into its ASCII lookup key.
///
/// Steps, in order:
/// 1. Trim leading/trailing whitespace.
/// 2. Uppercase.
/// 3. Collapse each internal whitespace run into a single underscore.
/// 4. Map accented vowels and Ñ to their unaccented equivalents.
/// 5. Drop every remaining character outside `[A-Z0-9_]`.
///
/// The result is idempotent: normalizing an already-normalized key returns it
/// unchanged.
pub fn normalize_role_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_whitespace_run = false;

    for c in name.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace_run {
                normalized.push('_');
                in_whitespace_run = true;
            }
            continue;
        }
        in_whitespace_run = false;

        for upper in c.to_uppercase() {
            let ascii = match upper {
                'Á' | 'À' | 'Ä' | 'Â' => 'A',
                'É' | 'È' | 'Ë' | 'Ê' => 'E',
                'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
                'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
                'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
                'Ñ' => 'N',
                other => other,
            };
            if ascii.is_ascii_uppercase() || ascii.is_ascii_digit() || ascii == '_' {
                normalized.push(ascii);
            }
        }
    }

    normalized
}

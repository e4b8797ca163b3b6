//! Field-name case normalization.

/// Converts an element name to lower snake case.
///
/// Word boundaries are detected at lower-to-upper transitions
/// (`articleId` → `article_id`), at the end of an acronym followed by a
/// capitalized word (`OENumber` → `oe_number`), and at `-`, `.` and space
/// separators. Digits stay attached to the preceding word
/// (`getVehicleByIds2` → `get_vehicle_by_ids2`). The conversion is idempotent.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '-' | '.' | ' ' | '_') {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 && !out.is_empty() && !out.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('_');
            }
        }

        out.extend(c.to_lowercase());
    }

    if out.ends_with('_') {
        out.pop();
    }
    out
}

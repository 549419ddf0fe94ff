//! Unit symbol canonicalization
//!
//! Turns human-entered unit strings ("kg / s", "BTU p (h x ft x F)",
//! "  deg f  ") into a token that can be compared against the canonicalized
//! symbols of a unit enum. The output is only ever compared, never shown.
//!
//! Stages run in a fixed order; each quantity type picks the stages it needs
//! through a [`SymbolRules`] table:
//!
//! 1. trim + lowercase (always)
//! 2. remove internal whitespace
//! 3. whole-token synonyms
//! 4. exponent unification (`³`, `^3` -> `3`)
//! 5. operator unification (`*`, `·`, `×` dropped; `x` and `.` dropped
//!    between operands; `per` -> `/`; optionally `p` between operands -> `/`)
//! 6. parentheses removal
//! 7. degree-sign unification
//! 8. suffix stripping

/// Canonical degree marker
pub const DEGREE_SIGN: char = '°';

/// Which canonicalization stages a quantity type enables.
///
/// Built with const builder methods so each unit enum can declare its rules
/// as a `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRules {
    pub remove_whitespace: bool,
    pub synonyms: &'static [(&'static str, &'static str)],
    pub exponents: bool,
    pub operators: bool,
    pub p_divide: bool,
    pub parentheses: bool,
    pub degrees: bool,
    pub suffixes: &'static [&'static str],
}

impl SymbolRules {
    /// Trim, lowercase and nothing else
    pub const NONE: SymbolRules = SymbolRules {
        remove_whitespace: false,
        synonyms: &[],
        exponents: false,
        operators: false,
        p_divide: false,
        parentheses: false,
        degrees: false,
        suffixes: &[],
    };

    /// Trim, lowercase, drop internal whitespace
    pub const BASIC: SymbolRules = SymbolRules::NONE.with_whitespace_removal();

    /// Rules for compound symbols such as `kg/(m·s)` or `m³/h`
    pub const COMPOUND: SymbolRules = SymbolRules::BASIC
        .with_exponents()
        .with_operators()
        .with_parentheses();

    pub const fn with_whitespace_removal(self) -> Self {
        Self { remove_whitespace: true, ..self }
    }

    pub const fn with_synonyms(self, synonyms: &'static [(&'static str, &'static str)]) -> Self {
        Self { synonyms, ..self }
    }

    pub const fn with_exponents(self) -> Self {
        Self { exponents: true, ..self }
    }

    pub const fn with_operators(self) -> Self {
        Self { operators: true, ..self }
    }

    /// Treat a lone `p` between two operands as a division (`kgps` = `kg/s`).
    /// Implies operator unification.
    pub const fn with_p_divide(self) -> Self {
        Self { operators: true, p_divide: true, ..self }
    }

    pub const fn with_parentheses(self) -> Self {
        Self { parentheses: true, ..self }
    }

    pub const fn with_degrees(self) -> Self {
        Self { degrees: true, ..self }
    }

    pub const fn with_suffixes(self, suffixes: &'static [&'static str]) -> Self {
        Self { suffixes, ..self }
    }
}

impl Default for SymbolRules {
    fn default() -> Self {
        Self::BASIC
    }
}

/// Canonicalize a raw symbol under the given rules.
///
/// The pipeline is repeated until the output stops changing, so the result
/// is a fixed point: `canonicalize(&canonicalize(s, r), r) == canonicalize(s, r)`.
pub fn canonicalize(raw: &str, rules: &SymbolRules) -> String {
    let mut current = single_pass(raw, rules);

    // Every stage but synonyms shortens the token or rewrites a character for
    // good; the bound only stops a cyclic synonym table.
    let longest_synonym = rules.synonyms.iter().map(|(_, to)| to.chars().count()).max().unwrap_or(0);
    let max_passes = 2 * (current.chars().count() + longest_synonym) + rules.synonyms.len() + 2;
    for _ in 0..max_passes {
        let next = single_pass(&current, rules);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn single_pass(raw: &str, rules: &SymbolRules) -> String {
    let mut s = raw.trim().to_lowercase();

    if rules.remove_whitespace {
        s.retain(|c| !c.is_whitespace());
    }

    if let Some((_, replacement)) = rules.synonyms.iter().find(|(from, _)| *from == s) {
        s = (*replacement).to_string();
    }

    if rules.exponents {
        s = unify_exponents(&s);
    }

    if rules.operators {
        s = unify_operators(&s, rules.p_divide);
    }

    if rules.parentheses {
        s.retain(|c| c != '(' && c != ')');
    }

    if rules.degrees {
        s = unify_degrees(&s);
    }

    strip_suffixes(s, rules.suffixes)
}

/// Strip suffixes until none matches; a suffix is never the whole token
fn strip_suffixes(mut s: String, suffixes: &[&str]) -> String {
    while let Some(len) = suffixes
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix).filter(|rest| !rest.is_empty()).map(str::len))
    {
        s.truncate(len);
    }
    s
}

fn unify_exponents(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '^')
        .map(|c| match c {
            '¹' => '1',
            '²' => '2',
            '³' => '3',
            other => other,
        })
        .collect()
}

fn unify_operators(s: &str, p_divide: bool) -> String {
    let s = s.replace("per", "/");
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();

        let between_operands = prev.is_some_and(|p| p.is_alphanumeric() || p == ')')
            && next.is_some_and(|n| n.is_alphanumeric() || n == '(');

        match c {
            '*' | '×' | '·' | '⋅' | '•' => {}
            // At the edge of a token ("lux", "xm") it is a letter
            'x' if between_operands => {}
            '.' => {
                // Decimal points inside numbers survive
                let in_number = prev.is_some_and(|p| p.is_ascii_digit())
                    && next.is_some_and(|n| n.is_ascii_digit());
                if in_number {
                    out.push(c);
                }
            }
            'p' if p_divide
                && prev.is_some_and(|p| p.is_alphanumeric() || p == ')')
                && next.is_some_and(|n| n.is_alphabetic() || n == '(') =>
            {
                out.push('/');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Replace degree spellings (`deg`, `degree`, `degrees`, `º`, `˚`) with `°`.
///
/// Shared by the canonicalizer and by coordinate parsing.
pub fn normalize_degree_signs(s: &str) -> String {
    s.replace("degrees", "°")
        .replace("degree", "°")
        .replace("deg", "°")
        .replace(['º', '˚'], "°")
}

fn unify_degrees(s: &str) -> String {
    let s = normalize_degree_signs(s);
    let chars: Vec<char> = s.chars().collect();

    // A lone "o", or "o" written next to a single letter ("oC", "Fo")
    match chars.as_slice() {
        ['o'] => return DEGREE_SIGN.to_string(),
        ['o', letter] | [letter, 'o'] if letter.is_alphabetic() => return letter.to_string(),
        _ => {}
    }

    // The marker carries no information next to a scale letter: °c == c
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == DEGREE_SIGN {
            let prev_letter = i > 0 && chars[i - 1].is_alphabetic();
            let next_letter = chars.get(i + 1).is_some_and(|n| n.is_alphabetic());
            if prev_letter || next_letter {
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FLOW: SymbolRules = SymbolRules::COMPOUND.with_p_divide();
    const THERMAL: SymbolRules = SymbolRules::COMPOUND.with_p_divide().with_degrees();
    const TEMPERATURE: SymbolRules = SymbolRules::BASIC
        .with_synonyms(&[("celsius", "c"), ("fahrenheit", "f")])
        .with_degrees();
    const HUMIDITY: SymbolRules = SymbolRules::COMPOUND
        .with_p_divide()
        .with_suffixes(&["dryair", "da"]);

    #[rstest]
    #[case("kg/s", "kg/s")]
    #[case("kg / s", "kg/s")]
    #[case("  KG/S ", "kg/s")]
    #[case("kgps", "kg/s")]
    #[case("kg per s", "kg/s")]
    #[case("(g.cm)ps", "gcm/s")]
    #[case("gcmps", "gcm/s")]
    #[case("m³/h", "m3/h")]
    #[case("m^3/h", "m3/h")]
    #[case("m3ph", "m3/h")]
    fn test_flow_rules(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(canonicalize(raw, &FLOW), expected);
    }

    #[rstest]
    #[case("BTU/(h·ft·°F)", "btu/hftf")]
    #[case("BTU p (h x ft x F)", "btu/hftf")]
    #[case("btu / (h * ft * deg F)", "btu/hftf")]
    #[case("W/(m·K)", "w/mk")]
    #[case("W / (m x K)", "w/mk")]
    fn test_thermal_rules(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(canonicalize(raw, &THERMAL), expected);
    }

    #[rstest]
    #[case("°C", "c")]
    #[case("  deg f  ", "f")]
    #[case("degC", "c")]
    #[case("ºF", "f")]
    #[case("oC", "c")]
    #[case("C°", "c")]
    #[case("Celsius", "c")]
    #[case("degrees celsius", "c")]
    #[case("K", "k")]
    #[case("°", "°")]
    #[case("deg", "°")]
    #[case("o", "°")]
    fn test_degree_rules(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(canonicalize(raw, &TEMPERATURE), expected);
    }

    #[rstest]
    #[case("kg/kg(da)", "kg/kg")]
    #[case("g/kg dry air", "g/kg")]
    #[case("gpkg", "g/kg")]
    fn test_suffix_rules(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(canonicalize(raw, &HUMIDITY), expected);
    }

    #[test]
    fn test_stages_are_optional() {
        // Pressure-like rules must leave "kPa" alone
        assert_eq!(canonicalize("kPa", &SymbolRules::BASIC), "kpa");
        assert_eq!(canonicalize("k Pa", &SymbolRules::NONE), "k pa");
        // Without degree handling the marker is kept
        assert_eq!(canonicalize("°C", &SymbolRules::BASIC), "°c");
        // Without p_divide a trailing or leading p is untouched anyway
        assert_eq!(canonicalize("cP", &SymbolRules::COMPOUND), "cp");
        assert_eq!(canonicalize("Pa·s", &SymbolRules::COMPOUND), "pas");
    }

    #[test]
    fn test_decimal_point_survives() {
        assert_eq!(canonicalize("1.5m", &SymbolRules::COMPOUND), "1.5m");
        assert_eq!(canonicalize("m.s", &SymbolRules::COMPOUND), "ms");
    }

    #[test]
    fn test_synonym_then_degree() {
        // "degrees" is only stripped in the first pass; the synonym applies in the next
        assert_eq!(canonicalize("degreescelsius", &TEMPERATURE), "c");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "", " ", "kg / s", "KG/S", "kgps", "(g.cm)ps", "BTU p (h x ft x F)",
            "  deg f  ", "°", "o", "oC", "pexr", "kg(p)s", "°°c", "dexg", "ppxerxer",
            "m^3 per h", "%RH", "kg/kg(da)", "İstanbul", "1.5 m.s", "((x))", "p", "per",
        ]
        .map(String::from)
        .to_vec();
        let nested = [
            format!("kg/kg{}", "da".repeat(10)),
            format!("g/kg{}dryair{}", "da".repeat(3), "da"),
            format!("{}deg{}", "de".repeat(9), "g".repeat(9)),
            format!("{}er{}", "p".repeat(5), "er".repeat(4)),
        ];
        let inputs: Vec<String> = inputs.into_iter().chain(nested).collect();
        let rule_sets = [
            SymbolRules::NONE,
            SymbolRules::BASIC,
            SymbolRules::COMPOUND,
            FLOW,
            THERMAL,
            TEMPERATURE,
            HUMIDITY,
        ];
        for rules in &rule_sets {
            for raw in &inputs {
                let once = canonicalize(raw, rules);
                let twice = canonicalize(&once, rules);
                assert_eq!(once, twice, "not idempotent for {:?} under {:?}", raw, rules);
            }
        }
    }

    #[test]
    fn test_repeated_layers_are_peeled() {
        assert_eq!(canonicalize(&format!("kg/kg{}", "da".repeat(10)), &HUMIDITY), "kg/kg");
        assert_eq!(canonicalize("g/kg dry air da", &HUMIDITY), "g/kg");

        // Each removed "deg" joins its neighbours into a new one
        let nested_degree = format!("{}deg{}", "de".repeat(9), "g".repeat(9));
        assert_eq!(canonicalize(&nested_degree, &TEMPERATURE), "°");
    }

    #[rstest]
    #[case("m x s", "ms")]
    #[case("m×s", "ms")]
    #[case("(h)x(ft)", "hft")]
    #[case("lux", "lux")]
    #[case("x", "x")]
    #[case("xm", "xm")]
    #[case("m x", "mx")]
    fn test_x_only_between_operands(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(canonicalize(raw, &SymbolRules::COMPOUND), expected);
    }

    #[test]
    fn test_normalize_degree_signs() {
        assert_eq!(normalize_degree_signs("52deg14'"), "52°14'");
        assert_eq!(normalize_degree_signs("52º"), "52°");
        assert_eq!(normalize_degree_signs("10 degrees"), "10 °");
    }
}

//! Lookup alias generation for food search.

/// Upper bound on aliases per record.
pub const MAX_ALIASES: usize = 6;

/// Tokens this short are never aliases on their own.
const MIN_TOKEN_CHARS: usize = 3;

/// Generates lowercase lookup aliases for a food name.
///
/// Candidates, in order:
/// 1. the full lowercased name (always first)
/// 2. each whitespace token of 3+ characters, left to right
/// 3. the text before the first `(`
/// 4. the name with ` and ` spelled ` & `
///
/// Duplicates are skipped and generation stops at [`MAX_ALIASES`].
pub fn generate_aliases(name: &str) -> Vec<String> {
    let lowered = name.to_lowercase();
    let mut aliases = AliasSet::new();
    aliases.push(lowered.clone());

    for token in lowered.split_whitespace() {
        if token.chars().count() >= MIN_TOKEN_CHARS {
            aliases.push(token.to_string());
        }
    }

    if let Some((before, _)) = lowered.split_once('(') {
        aliases.push(before.trim().to_string());
    }

    if lowered.contains(" and ") {
        aliases.push(lowered.replace(" and ", " & "));
    }

    aliases.into_vec()
}

/// Insertion-ordered, bounded, duplicate-free alias list.
struct AliasSet {
    values: Vec<String>,
}

impl AliasSet {
    fn new() -> Self {
        Self {
            values: Vec::with_capacity(MAX_ALIASES),
        }
    }

    fn push(&mut self, alias: String) {
        if self.values.len() < MAX_ALIASES && !self.values.contains(&alias) {
            self.values.push(alias);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.values
    }
}

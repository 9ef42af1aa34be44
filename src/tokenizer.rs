/// Split a finalized line into whitespace-delimited tokens.
///
/// Runs of whitespace count as one separator and never produce empty tokens,
/// so a blank line yields an empty list.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

//! Longest repeated substring finder.
//!
//! Suffix-pair dynamic program used to spot reusable digit patterns in CSD
//! strings (two occurrences of the same pattern can share one partial
//! product in a multiplier). O(n²) time and space.

/// Find the longest substring occurring at least twice without the two
/// occurrences overlapping.
///
/// The table entry at `(i, j)` holds the length of the common run ending
/// at positions `i - 1` and `j - 1`; the guard `table[i-1][j-1] < j - i`
/// rejects runs that would overlap. Among maximal-length repeats the
/// rightmost end index seen by the forward scan wins.
///
/// # Arguments
/// * `s` - Input string (typically a CSD digit string)
///
/// # Returns
/// The longest non-overlapping repeated substring, or `""` when the input
/// is shorter than two characters or has no repeat.
///
/// # Examples
/// ```
/// use csd::longest_repeated_substring;
///
/// assert_eq!(longest_repeated_substring("+-00+-00+-00+-0"), "+-00+-0");
/// assert_eq!(longest_repeated_substring("abcdefgh"), "");
/// ```
pub fn longest_repeated_substring(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let dim = n + 1;

    // Flat (n+1) x (n+1) scratch table, rebuilt per call.
    let mut table = vec![0usize; dim * dim];

    let mut best_len = 0usize;
    let mut end = 0usize;

    for i in 1..dim {
        for j in (i + 1)..dim {
            let prev = table[(i - 1) * dim + (j - 1)];
            if chars[i - 1] == chars[j - 1] && prev < j - i {
                let run = prev + 1;
                table[i * dim + j] = run;
                if run > best_len {
                    best_len = run;
                    end = end.max(i);
                }
            }
        }
    }

    chars[end - best_len..end].iter().collect()
}

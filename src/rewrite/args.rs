//! Argument splitting for located call sites.
//!
//! The default [`ArgumentScan::Flat`] mode is purely lexical: the call ends at
//! the first `)` after its `(` and every comma starts a new argument. A nested
//! call or an initializer list inside an argument therefore breaks both the
//! call boundary and the split. [`ArgumentScan::Nested`] tracks bracket depth
//! instead; it produces different output on such inputs and is opt-in.

/// How call boundaries and argument separators are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentScan {
    /// First `)` closes the call, every `,` splits.
    #[default]
    Flat,
    /// Depth-aware over `()`, `[]` and `{}`; only top-level commas split.
    Nested,
}

impl ArgumentScan {
    pub fn from_nested(nested: bool) -> Self {
        if nested {
            ArgumentScan::Nested
        } else {
            ArgumentScan::Flat
        }
    }

    /// Offset of the `)` closing the `(` at `open`, or `None` if there is none.
    pub fn find_close(self, text: &str, open: usize) -> Option<usize> {
        let body_start = open + 1;
        match self {
            ArgumentScan::Flat => text[body_start..].find(')').map(|i| body_start + i),
            ArgumentScan::Nested => {
                let mut depth = 0usize;
                for (i, b) in text[body_start..].bytes().enumerate() {
                    match b {
                        b'(' | b'[' | b'{' => depth += 1,
                        b')' if depth == 0 => return Some(body_start + i),
                        b')' | b']' | b'}' => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                }
                None
            }
        }
    }

    /// Split the text between a call's parentheses into raw argument strings.
    ///
    /// An empty list yields no arguments. Otherwise the trailing run after the
    /// last separator is always an argument, even when it is empty. Argument
    /// text is returned untrimmed.
    pub fn split<'a>(self, args: &'a str) -> Vec<&'a str> {
        if args.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (i, b) in args.bytes().enumerate() {
            match (self, b) {
                (ArgumentScan::Nested, b'(' | b'[' | b'{') => depth += 1,
                (ArgumentScan::Nested, b')' | b']' | b'}') => depth = depth.saturating_sub(1),
                (_, b',') if depth == 0 => {
                    out.push(&args[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        out.push(&args[start..]);
        out
    }
}

/// Split with the default flat scan.
pub fn split_arguments(args: &str) -> Vec<&str> {
    ArgumentScan::Flat.split(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_arguments() {
        assert!(split_arguments("").is_empty());
    }

    #[test]
    fn trailing_run_is_included() {
        assert_eq!(split_arguments("x,y,w"), vec!["x", "y", "w"]);
        assert_eq!(split_arguments("a,"), vec!["a", ""]);
        assert_eq!(split_arguments(" a , b"), vec![" a ", " b"]);
    }

    #[test]
    fn flat_split_breaks_nested_calls() {
        // known limitation of the flat scan
        assert_eq!(split_arguments("f(a,b),c"), vec!["f(a", "b)", "c"]);
    }

    #[test]
    fn nested_split_keeps_nested_calls_whole() {
        assert_eq!(
            ArgumentScan::Nested.split("f(a,b),{1,2},c[i,j]"),
            vec!["f(a,b)", "{1,2}", "c[i,j]"]
        );
    }

    #[test]
    fn find_close_flat_stops_at_first_paren() {
        let text = "g(f(a),b);";
        assert_eq!(ArgumentScan::Flat.find_close(text, 1), Some(5));
    }

    #[test]
    fn find_close_nested_matches_depth() {
        let text = "g(f(a),b);";
        assert_eq!(ArgumentScan::Nested.find_close(text, 1), Some(8));
        assert_eq!(ArgumentScan::Nested.find_close("g(f(a", 1), None);
    }

    #[test]
    fn from_nested_flag() {
        assert_eq!(ArgumentScan::from_nested(false), ArgumentScan::Flat);
        assert_eq!(ArgumentScan::from_nested(true), ArgumentScan::Nested);
    }
}

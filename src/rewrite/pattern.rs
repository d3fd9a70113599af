//! Regex-driven structural rewrites.

use regex::{Captures, NoExpand, Regex};

/// What to do with each match of a [`PatternRule`].
#[derive(Debug, Clone)]
pub enum PatternAction {
    /// Replacement template with `${n}` back-references.
    Expand(String),
    /// Replacement text inserted as-is.
    Verbatim(String),
    /// Drop the `Fl_` prefix and the `_` at the last lower/upper boundary.
    ///
    /// Expects group 1 = the character before `Fl_`, groups 2..=4 = the
    /// identifier pieces kept. Identifiers listed here are left alone.
    Deprefix { exempt: Vec<String> },
    /// Close a `Rectangle(` construct whose enclosing call is still open at
    /// the statement terminator.
    CloseRectangle,
}

/// A compiled search pattern plus its replacement behavior.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: &'static str,
    pub regex: Regex,
    pub action: PatternAction,
}

impl PatternRule {
    pub fn new(
        name: &'static str,
        pattern: &str,
        action: PatternAction,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            action,
        })
    }

    /// Rewrite every non-overlapping match in `text`.
    pub fn apply(&self, text: &str) -> String {
        match &self.action {
            PatternAction::Expand(template) => {
                self.regex.replace_all(text, template.as_str()).into_owned()
            }
            PatternAction::Verbatim(replacement) => self
                .regex
                .replace_all(text, NoExpand(replacement.as_str()))
                .into_owned(),
            PatternAction::Deprefix { exempt } => self
                .regex
                .replace_all(text, |caps: &Captures| deprefix(text, caps, exempt))
                .into_owned(),
            PatternAction::CloseRectangle => self
                .regex
                .replace_all(text, |caps: &Captures| close_rectangle(&caps[0]))
                .into_owned(),
        }
    }
}

fn deprefix(text: &str, caps: &Captures, exempt: &[String]) -> String {
    let whole = &caps[0];
    if !exempt.is_empty() {
        let ident_start = caps.get(1).map_or(0, |m| m.end());
        let ident_end = text[ident_start..]
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .map_or(text.len(), |i| ident_start + i);
        if exempt.iter().any(|e| e == &text[ident_start..ident_end]) {
            return whole.to_string();
        }
    }
    format!("{}{}{}{}", &caps[1], &caps[2], &caps[3], &caps[4])
}

/// `matched` runs from `Rectangle(` through the first `;` after it.
fn close_rectangle(matched: &str) -> String {
    let body = &matched[..matched.len() - 1];
    let balance: i64 = body
        .bytes()
        .map(|b| match b {
            b'(' => 1,
            b')' => -1,
            _ => 0,
        })
        .sum();

    if balance < 0 {
        return matched.to_string();
    }

    let closers = ")".repeat(balance as usize + 1);
    format!("{body}{closers};")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deprefix_rule(exempt: &[&str]) -> PatternRule {
        PatternRule::new(
            "deprefix",
            r#"(^|[^"])Fl_(\w*)([a-z])_([A-Z])"#,
            PatternAction::Deprefix {
                exempt: exempt.iter().map(|s| s.to_string()).collect(),
            },
        )
        .unwrap()
    }

    fn rectangle_rule() -> PatternRule {
        PatternRule::new(
            "close-rectangle",
            r"Rectangle\([^;]*;",
            PatternAction::CloseRectangle,
        )
        .unwrap()
    }

    #[test]
    fn expand_uses_backreferences() {
        let rule = PatternRule::new(
            "strip",
            r#"(^|[^"])fl_"#,
            PatternAction::Expand("${1}".to_string()),
        )
        .unwrap();
        assert_eq!(rule.apply("fl_alert(x); \"fl_x.h\""), "alert(x); \"fl_x.h\"");
    }

    #[test]
    fn verbatim_ignores_dollar_signs() {
        let rule =
            PatternRule::new("v", "X", PatternAction::Verbatim("$1".to_string())).unwrap();
        assert_eq!(rule.apply("aXb"), "a$1b");
    }

    #[test]
    fn deprefix_compound_identifier() {
        let rule = deprefix_rule(&[]);
        assert_eq!(rule.apply("new Fl_Check_Button(1,2)"), "new CheckButton(1,2)");
        assert_eq!(rule.apply("Fl_Check_Button *b;"), "CheckButton *b;");
    }

    #[test]
    fn deprefix_skips_quoted_identifier() {
        let rule = deprefix_rule(&[]);
        assert_eq!(rule.apply("\"Fl_Key_Func\""), "\"Fl_Key_Func\"");
    }

    #[test]
    fn deprefix_only_joins_last_boundary() {
        let rule = deprefix_rule(&[]);
        assert_eq!(rule.apply(" Fl_Hold_Browser_Item"), " Hold_BrowserItem");
    }

    #[test]
    fn deprefix_honors_exemptions() {
        let rule = deprefix_rule(&["Fl_Text_Display"]);
        assert_eq!(
            rule.apply(" Fl_Text_Display d; Fl_Text_Editor e;"),
            " Fl_Text_Display d; TextEditor e;"
        );
    }

    #[test]
    fn close_rectangle_adds_missing_closer() {
        let rule = rectangle_rule();
        assert_eq!(
            rule.apply("strokerect(Rectangle(x,y,w,h);"),
            "strokerect(Rectangle(x,y,w,h));"
        );
    }

    #[test]
    fn close_rectangle_leaves_balanced_statement() {
        let rule = rectangle_rule();
        let text = "setcolor(fltk::color(r,g,b));fillrect(Rectangle(x,y,w,h));";
        assert_eq!(rule.apply(text), text);
    }

    #[test]
    fn close_rectangle_spans_lines() {
        let rule = rectangle_rule();
        assert_eq!(
            rule.apply("push_clip(Rectangle(x,\n y, w, h);"),
            "push_clip(Rectangle(x,\n y, w, h));"
        );
    }
}

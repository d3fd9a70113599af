//! Namespace pass: class renames, `Fl_` de-prefixing, include remapping and
//! the final prefix strip.
//!
//! This pass runs last. The prefix strip at its end removes whatever `fl_`,
//! `FL_` and `Fl_` prefixes the earlier tables left behind, so it must stay
//! after every specific rename.

use super::{Pass, Rule, RuleError, RuleOptions};
use crate::rewrite::{PatternAction, PatternRule};

/// Replacement for the umbrella `<FL/Fl.H>` include.
pub const FL_INCLUDE: &str = "
//TODO: delete unused header files
#include <fltk/events.h>
#include <fltk/run.h>
#include <fltk/events.h>
#include <fltk/Color.h>
#include <fltk/Font.h>
#include <fltk/Box.h>
#include <fltk/error.h>
#include <fltk/visual.h>
#include <fltk/damage.h>
#include <fltk/filename.h>
#include <fltk/Cursor.h>";

/// Replacement for the legacy scrollbar include.
pub const SCROLL_INCLUDE: &str = "#include <fltk/ScrollGroup.h>
#include <fltk/Scrollbar.h>";

pub fn pass(options: &RuleOptions) -> Result<Pass, RuleError> {
    Ok(Pass::new("namespace", rules(options)?))
}

fn pattern(name: &'static str, regex: &str, action: PatternAction) -> Result<Rule, RuleError> {
    PatternRule::new(name, regex, action)
        .map(Rule::Pattern)
        .map_err(|source| RuleError::Pattern { rule: name, source })
}

fn expand(template: &str) -> PatternAction {
    PatternAction::Expand(template.to_string())
}

fn verbatim(text: &str) -> PatternAction {
    PatternAction::Verbatim(text.to_string())
}

pub fn rules(options: &RuleOptions) -> Result<Vec<Rule>, RuleError> {
    Ok(vec![
        // class and header renames that do not follow the general rule
        Rule::literal("FL/Fl_Menu_Button", "fltk/PopupMenu"),
        Rule::literal("FL/Fl_Double_Window", "fltk/Window"),
        Rule::literal("Fl_Menu_Button", "PopupMenu"),
        Rule::literal("Fl_Double_Window", "Window"),
        Rule::literal("FL/fl_show_input.H", "fltk/ask.h"),
        Rule::literal("FL/fl_message.H", "fltk/ask.h"),
        Rule::literal("EXPORT", "FL_API"),
        Rule::literal("damage(D", "set_damage(D"),
        Rule::literal("HORIZONTAL", "ScrollGroup::HORIZONTAL"),
        Rule::literal("Boxtype", "Box*"),
        // Fl_Check_Button -> CheckButton, but not inside a quoted path
        pattern(
            "deprefix-compound",
            r#"(^|[^"])Fl_(\w*)([a-z])_([A-Z])"#,
            PatternAction::Deprefix {
                exempt: options.deprefix_exempt.clone(),
            },
        )?,
        Rule::literal("Style_Table_Entry", "StyleTableEntry"),
        pattern(
            "close-rectangle",
            r"Rectangle\([^;]*;",
            PatternAction::CloseRectangle,
        )?,
        // includes
        pattern(
            "include-umbrella",
            r"# *include *<FL/Fl\.H>",
            verbatim(FL_INCLUDE),
        )?,
        pattern(
            "include-scrollbar",
            r"# *include *<FL/Fl_Scrollbar\.H>",
            verbatim(SCROLL_INCLUDE),
        )?,
        pattern(
            "include-class",
            r"# *include *<FL/Fl_",
            verbatim("#include <fltk/"),
        )?,
        pattern("include-dir", r"# *include *<FL/", verbatim("#include <fltk/"))?,
        Rule::literal("fltk/drawtext", "fltk/draw"),
        pattern("directive-column", r"(?m)^[ \t]*#[ \t]*", verbatim("#"))?,
        Rule::literal(".H", ".h"),
        Rule::literal("Fl::", "fltk::"),
        Rule::literal("<FL/", "<fltk/"),
        Rule::literal("#include <fltk/Preferences.h>", ""),
        // leftover prefixes, except right after a quote (user include files)
        pattern("strip-fl", r#"(^|[^"])fl_"#, expand("${1}"))?,
        pattern("strip-FL", r#"(^|[^"])FL_"#, expand("${1}"))?,
        pattern("strip-Fl", r#"(^|[^"])Fl_"#, expand("${1}"))?,
    ])
}

//! Call-site rewriting and erasure.
//!
//! Both operations work from a moving cursor over a buffer that is spliced in
//! place. Offsets are recomputed from the cursor after every mutation.

use crate::edit::Splice;
use crate::rewrite::args::ArgumentScan;
use crate::rewrite::errors::ScanError;
use tracing::trace;

/// A located call expression `name(arg1, ..., argN)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Byte offset of the first character of the function name
    pub name_start: usize,
    /// Byte offset of the opening `(`
    pub open_paren: usize,
    /// Byte offset of the closing `)`
    pub close_paren: usize,
    /// Raw argument text, in order
    pub args: Vec<&'a str>,
}

impl CallSite<'_> {
    /// Byte offset just past the closing paren.
    pub fn end(&self) -> usize {
        self.close_paren + 1
    }
}

/// Find the next call to `name` at or after `from`.
///
/// Returns `None` once `name` no longer occurs. A call whose `(` sits on a
/// later line than the name is reported as [`ScanError::LineBreak`]; a name
/// with no following `(` or `)` is reported as [`ScanError::MissingDelimiter`].
pub fn locate<'a>(
    text: &'a str,
    name: &str,
    from: usize,
    scan: ArgumentScan,
) -> Option<Result<CallSite<'a>, ScanError>> {
    let name_start = from + text.get(from..)?.find(name)?;

    let Some(open_paren) = text[name_start..].find('(').map(|i| name_start + i) else {
        return Some(Err(ScanError::MissingDelimiter {
            name: name.to_string(),
            delimiter: '(',
            offset: name_start,
        }));
    };

    let Some(close_paren) = scan.find_close(text, open_paren) else {
        return Some(Err(ScanError::MissingDelimiter {
            name: name.to_string(),
            delimiter: ')',
            offset: open_paren,
        }));
    };

    if let Some(line_break) = text[name_start..open_paren].find('\n') {
        return Some(Err(ScanError::LineBreak {
            name: name.to_string(),
            line_break: name_start + line_break,
        }));
    }

    Some(Ok(CallSite {
        name_start,
        open_paren,
        close_paren,
        args: scan.split(&text[open_paren + 1..close_paren]),
    }))
}

/// Fill a replacement template with captured arguments.
///
/// Every ASCII digit `k` with `1 <= k <= args.len()` is a placeholder for
/// argument `k`. Digits outside that range are copied through, and argument
/// text is never rescanned for placeholders.
pub fn instantiate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    for ch in template.chars() {
        match ch.to_digit(10) {
            Some(k) if k >= 1 && (k as usize) <= args.len() => out.push_str(args[k as usize - 1]),
            _ => out.push(ch),
        }
    }
    out
}

/// Rewrite every call to `name` with exactly `arity` arguments using `template`.
///
/// The whole expression from the name through its `)` is replaced. Calls with
/// a different argument count are left untouched, as are calls whose `(` is on
/// a later line. Scanning resumes after each inserted replacement.
pub fn refactor(text: &str, name: &str, template: &str, arity: usize, scan: ArgumentScan) -> String {
    let mut out = text.to_string();
    let mut cursor = 0;

    loop {
        let site = match locate(&out, name, cursor, scan) {
            None => break,
            Some(Ok(site)) => site,
            Some(Err(ScanError::LineBreak { line_break, .. })) => {
                trace!(name, line_break, "call split across lines, skipping");
                cursor = line_break + 1;
                continue;
            }
            Some(Err(err)) => {
                trace!(%err, "abandoning call rewrite");
                break;
            }
        };

        if site.args.len() != arity {
            let err = ScanError::ArityMismatch {
                name: name.to_string(),
                offset: site.name_start,
                expected: arity,
                found: site.args.len(),
            };
            trace!(%err, "skipping call site");
            cursor = site.end();
            continue;
        }

        let replacement = instantiate(template, &site.args);
        let splice = Splice::new(site.name_start, site.end(), replacement);
        cursor = splice.apply(&mut out);
    }

    out
}

/// Delete every statement that calls `name`, through its `;`.
///
/// The `)` searched for is the one closing the call according to `scan`; the
/// terminator is the first `;` after it. Scanning resumes at the deletion
/// point so directly adjacent calls are erased too.
pub fn noop(text: &str, name: &str, scan: ArgumentScan) -> String {
    let mut out = text.to_string();
    let mut cursor = 0;

    while let Some(found) = out.get(cursor..).and_then(|rest| rest.find(name)) {
        let start = cursor + found;

        let end = out[start..]
            .find('(')
            .map(|i| start + i)
            .and_then(|open| scan.find_close(&out, open))
            .and_then(|close| out[close..].find(';').map(|i| close + i));

        let Some(terminator) = end else {
            trace!(name, offset = start, "no complete statement to erase");
            break;
        };

        cursor = Splice::delete(start, terminator + 1).apply(&mut out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT: ArgumentScan = ArgumentScan::Flat;

    #[test]
    fn locate_reports_offsets_and_args() {
        let text = "  box_dx(b);";
        let site = locate(text, "box_dx", 0, FLAT).unwrap().unwrap();
        assert_eq!(site.name_start, 2);
        assert_eq!(site.open_paren, 8);
        assert_eq!(site.close_paren, 10);
        assert_eq!(site.args, vec!["b"]);
    }

    #[test]
    fn locate_missing_paren() {
        let err = locate("box_dx;", "box_dx", 0, FLAT).unwrap().unwrap_err();
        assert!(matches!(err, ScanError::MissingDelimiter { delimiter: '(', .. }));
    }

    #[test]
    fn locate_not_found() {
        assert!(locate("nothing here", "box_dx", 0, FLAT).is_none());
        assert!(locate("box_dx(a)", "box_dx", 40, FLAT).is_none());
    }

    #[test]
    fn instantiate_substitutes_all_placeholders() {
        let out = instantiate(
            "setcolor(fltk::color(5,6,7));fillrect(Rectangle(1,2,3,4))",
            &["x", "y", "w", "h", "r", "g", "b"],
        );
        assert_eq!(out, "setcolor(fltk::color(r,g,b));fillrect(Rectangle(x,y,w,h))");
    }

    #[test]
    fn instantiate_does_not_rescan_arguments() {
        assert_eq!(instantiate("1->size(2,3)", &["w", "12", "3"]), "w->size(12,3)");
    }

    #[test]
    fn instantiate_keeps_digits_beyond_arity() {
        assert_eq!(instantiate("fl_input(1,2)", &["msg"]), "fl_input(msg,2)");
        assert_eq!(instantiate("(GRAY00+(1))", &["n"]), "(GRAY00+(n))");
    }

    #[test]
    fn refactor_rewrites_matching_arity() {
        let out = refactor("fl_show_object(w);", "fl_show_object", "1->show()", 1, FLAT);
        assert_eq!(out, "w->show();");
    }

    #[test]
    fn refactor_leaves_other_overloads() {
        let src = "fl_set_object_size(o,1,2); fl_set_object_size(o);";
        let out = refactor(src, "fl_set_object_size", "1->size(2,3)", 3, FLAT);
        assert_eq!(out, "o->size(1,2); fl_set_object_size(o);");
    }

    #[test]
    fn refactor_zero_arity_uses_template_verbatim() {
        let out = refactor("n = get_font_sizes();", "get_font_sizes", "sizes", 0, FLAT);
        assert_eq!(out, "n = sizes;");
    }

    #[test]
    fn refactor_skips_call_split_across_lines() {
        let src = "box_dx\n(b); box_dx(c);";
        let out = refactor(src, "box_dx", "1->dx()", 1, FLAT);
        assert_eq!(out, "box_dx\n(b); c->dx();");
    }

    #[test]
    fn refactor_does_not_reprocess_replacement() {
        // the template reintroduces the function name
        let out = refactor("f(a); f(b);", "f", "f(1,1)", 1, FLAT);
        assert_eq!(out, "f(a,a); f(b,b);");
    }

    #[test]
    fn refactor_stops_on_missing_close_paren() {
        let out = refactor("box_dx(b", "box_dx", "1->dx()", 1, FLAT);
        assert_eq!(out, "box_dx(b");
    }

    #[test]
    fn refactor_nested_scan_handles_inner_calls() {
        let src = "fl_show_object(get(w));";
        let flat = refactor(src, "fl_show_object", "1->show()", 1, FLAT);
        assert_eq!(flat, "get(w->show());");
        let nested = refactor(src, "fl_show_object", "1->show()", 1, ArgumentScan::Nested);
        assert_eq!(nested, "get(w)->show();");
    }

    #[test]
    fn noop_removes_statement() {
        let out = noop("a();\nfl_set_border_width(3);\nb();", "fl_set_border_width", FLAT);
        assert_eq!(out, "a();\n\nb();");
    }

    #[test]
    fn noop_catches_adjacent_calls() {
        let out = noop("fl_init();fl_init(x);rest", "fl_init", FLAT);
        assert_eq!(out, "rest");
    }

    #[test]
    fn noop_erases_trailing_text_up_to_terminator() {
        assert_eq!(noop("x;fl_init(a) foo;y", "fl_init", FLAT), "x;y");
        assert_eq!(noop("x;fl_init(a)\n  ;\ny", "fl_init", FLAT), "x;\ny");
    }

    #[test]
    fn noop_stops_without_terminator() {
        let out = noop("fl_init()", "fl_init", FLAT);
        assert_eq!(out, "fl_init()");
    }
}

//! Inline function conversions: drawing primitives and XForms accessors.
//!
//! Most XForms accessors become member calls on their first argument through
//! call rules; calls with no FLTK 2 counterpart are erased.

use super::{Pass, Rule};

pub fn pass() -> Pass {
    Pass::new("inlines", rules())
}

pub fn rules() -> Vec<Rule> {
    vec![
        // screen geometry and box metrics
        Rule::literal("Fl::x()", "Monitor::all().x()"),
        Rule::literal("Fl::y()", "Monitor::all().y()"),
        Rule::literal("Fl::w()", "Monitor::all().w()"),
        Rule::literal("Fl::h()", "Monitor::all().h()"),
        Rule::literal("get_color", "/*FIXME:get_color_index|split_color */"),
        Rule::call("get_font_sizes", "sizes", 0),
        Rule::call("box_dx", "1->dx()", 1),
        Rule::call("box_dy", "1->dy()", 1),
        Rule::call("box_dw", "1->dw()", 1),
        Rule::call("box_dh", "1->dh()", 1),
        Rule::call("event_key", "event_key_state(1)", 1),

        // fl_draw.H primitives; `Rectangle` openers are closed by the namespace pass
        Rule::literal("fl_color", "setcolor /*FIXME:getcolor*/"),
        Rule::literal("fl_push_clip", "push_clip(Rectangle"),
        Rule::literal("fl_not_clipped", "not_clipped(Rectangle"),
        Rule::literal("fl_point", "addvertex /*FIXME:drawpoints();*/"),
        Rule::literal("fl_rect", "strokerect(Rectangle"),
        Rule::literal("fl_rectf", "fillrect(Rectangle"),
        Rule::literal("fl_line", "drawline"),
        Rule::literal("fl_xyline", "drawline /*FIXME:addvertex|strokepath*/"),
        Rule::literal("fl_yxline", "drawline /*FIXME:addvertex|strokepath*/"),
        Rule::literal("fl_arc", "addchord(Rectangle /*FIXME:strokepath*/"),
        Rule::literal("fl_pie", "addpie(Rectangle /*FIXME:fillpath*/"),
        Rule::literal("fl_chord", "addchord(Rectangle /*FIXME:fillpath*/"),
        Rule::literal("fl_end_loop()", "fltk::closepath();fltk::strokepath()"),
        Rule::literal("fl_font", "setfont /*FIXME:getfont*/"),
        Rule::literal("fl_size", "getsize"),
        Rule::literal("fl_height()", "getascent()+getdescent()"),
        Rule::literal("fl_descent", "getdescent"),
        Rule::literal("fl_width", "getwidth"),
        Rule::literal("fl_draw", "drawtext"),
        Rule::literal("fl_draw_image", "drawimage"),
        Rule::literal("fl_read_image", "readimage"),
        Rule::call("fl_rectf", "setcolor(fltk::color(5,6,7));fillrect(Rectangle(1,2,3,4))", 7),

        // XForms event loop
        Rule::literal("fl_set_idle_callback", "set_idle"),
        Rule::literal("fl_do_only_forms", "fl_do_forms"),
        Rule::literal("fl_check_only_forms", "fl_check_forms"),
        Rule::literal("fl_set_focus_object", "focus /*TODO:fixme*/"),

        // XForms object accessors
        Rule::call("fl_set_object_boxtype", "1->box(2)", 2),
        Rule::call("fl_set_object_lsize", "1->label_size(2)", 2),
        Rule::call("fl_set_object_lcol", "1->label_color((Fl_Color)2)", 2),
        Rule::call("fl_set_object_lalign", "1->clear_flag(FL_ALIGN_MASK);1->set_flag(2)", 2),
        Rule::call("fl_set_object_color", "1->color((Fl_Color)2); 1->selection_color((Fl_Color)3)", 3),
        Rule::call("fl_set_object_label", "1->label(2); 1->redraw()", 2),
        Rule::call("fl_set_object_position", "1->position(2,3)", 3),
        Rule::call("fl_set_object_size", "1->size(2,3)", 3),
        Rule::call("fl_set_object_geometry", "1->resize(2,3,4,5)", 5),
        Rule::call("fl_set_object_callback", "1->callback(2,3)", 3),
        Rule::call("fl_call_object_callback", "1->do_callback()", 1),
        Rule::call("fl_trigger_object", "1->do_callback()", 1),
        Rule::call("fl_redraw_object", "1->redraw()", 1),
        Rule::call("fl_show_object", "1->show()", 1),
        Rule::call("fl_hide_object", "1->hide()", 1),
        Rule::call("fl_free_object", "delete 1;", 1),
        Rule::call("fl_delete_object", "(Fl_Group*)(1->parent()))->remove(1))", 1),
        Rule::call("fl_activate_object", "1->activate()", 1),
        Rule::call("fl_deactivate_object", "1->deactivate()", 1),
        Rule::call("fl_add_object", "1->add(2)", 2),
        Rule::call("FL_ObjWin", "1->window()", 1),

        // XForms forms and groups
        Rule::literal("fl_get_border_width", "3"),
        Rule::erase("fl_set_border_width"),
        Rule::erase("fl_set_object_dblbuffer"),
        Rule::erase("fl_set_form_dblbuffer"),
        Rule::call("fl_free_form", "delete 1", 1),
        Rule::call("fl_redraw_form", "1->redraw()", 1),
        Rule::call("fl_addto_form", "1->begin()", 1),
        Rule::literal("fl_bgn_group()", "new Fl_Group(0,0,0,0,0)"),
        Rule::call("fl_addto_group", "((Fl_Group*)1)->begin()", 1),
        Rule::call("fl_set_form_position", "1->position(2,3)", 3),
        Rule::call("fl_set_form_size", "1->size(2,3)", 3),
        Rule::erase("fl_adjust_form_size"),
        Rule::call("fl_set_form_hotspot", "1->hotspot(2,3)", 3),
        Rule::call("fl_set_form_hotobject", "1->hotspot(2)", 2),
        Rule::call("fl_flip_yorigin", "fl_flip = 1", 0),
        Rule::erase("fl_show_form_window"),
        Rule::call("fl_raise_form", "1->show()", 1),
        Rule::call("fl_hide_form", "1->hide()", 1),
        Rule::call("fl_pop_form", "1->show()", 1),
        Rule::erase("fl_activate_all_forms"),
        Rule::call("fl_deactivate_all_forms", "fl_modal_next = 1", 0),
        Rule::call("fl_deactivate_form", "1->deactivate()", 1),
        Rule::call("fl_activate_form", "1->activate()", 1),
        Rule::call("fl_set_form_title", "1->label(2)", 2),
        Rule::call("fl_title_form", "1->label(2)", 2),
        Rule::call("fl_set_form_callback", "1->callback(2)", 2),
        Rule::erase("fl_init"),
        Rule::call("fl_form_is_visible", "1->visible()", 1),

        // XForms buttons, dialogs and timers
        Rule::literal("fl_mouse_button", "event_button"),
        Rule::erase("fl_add_new"),
        Rule::call("fl_add_new", "2->type(1); return 2", 2),
        Rule::call("fl_set_pixmap_align", "1->clear_flag(FL_ALIGN_MASK); 1->set_flag(2)", 2),
        Rule::call("fl_get_button", "((Fl_Button*)1)->value()", 1),
        Rule::call("fl_set_button", "((Fl_Button*)1)->value(2)", 2),
        Rule::call("fl_get_button_numb", "event_button()", 0),
        Rule::call("fl_add_bitmapbutton", "fl_add_button(1,2,3,4,5)", 5),
        Rule::call("fl_add_pixmapbutton", "fl_add_button(1,2,3,4,5,6)", 6),
        Rule::call("fl_set_cursor", "1->cursor(2)", 2),
        Rule::call("fl_show_question", "fl_ask(1)", 1),
        Rule::call("fl_show_question", "fl_ask(1)", 2),
        Rule::call("fl_show_input", "fl_input(1,2)", 1),
        Rule::call("fl_show_input", "fl_input(1,2)", 2),
        Rule::call("do_matching", "filename_match(1,2)", 2),
        Rule::call("fl_get_input", "((Fl_Input*)1)->value()", 1),
        Rule::call("fl_set_timer", "((Fl_Timer*)1)->value(2)", 2),
        Rule::call("fl_get_timer", "((Fl_Timer*)1)->value()", 1),
        Rule::call("fl_suspend_timer", "((Fl_Timer*)1)->suspended(_ONE_)", 1),
        Rule::call("fl_resume_timer", "((Fl_Timer*)1)->suspended(1)", 1),
        Rule::call("fl_set_timer_countup", "((Fl_Timer*)1)->direction(2))", 2),

        // leftovers
        Rule::literal("fl_double_click()", "event_clicks()"),
        Rule::literal("fl_draw", "flush()"),
        Rule::literal("gl_height()", "fltk::glgetascent()+fltk::glgetdescent()"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::ArgumentScan;

    fn run(text: &str) -> String {
        pass().run(text, ArgumentScan::Flat)
    }

    #[test]
    fn object_accessors_become_member_calls() {
        assert_eq!(run("fl_set_object_label(ob, \"Ok\");"), "ob->label( \"Ok\"); ob->redraw();");
        assert_eq!(run("fl_show_object(ob);"), "ob->show();");
        assert_eq!(run("fl_set_object_geometry(ob,1,2,3,4);"), "ob->resize(1,2,3,4);");
    }

    #[test]
    fn unsupported_calls_are_erased() {
        assert_eq!(run("a();fl_set_border_width(2);b();"), "a();b();");
        assert_eq!(run("fl_adjust_form_size(f);\n"), "\n");
    }

    #[test]
    fn rect_literal_opens_rectangle() {
        assert_eq!(run("fl_rect(x,y,w,h);"), "strokerect(Rectangle(x,y,w,h);");
    }

    #[test]
    fn box_metrics_take_the_box_as_receiver() {
        assert_eq!(run("int d = box_dx(b);"), "int d = b->dx();");
    }

    #[test]
    fn screen_geometry() {
        assert_eq!(run("Fl::w()"), "Monitor::all().w()");
        assert_eq!(run("Fl::h()"), "Monitor::all().h()");
    }

    #[test]
    fn zero_arity_forms_calls() {
        assert_eq!(run("fl_flip_yorigin();"), "fl_flip = 1;");
        assert_eq!(run("n = get_font_sizes();"), "n = sizes;");
    }
}

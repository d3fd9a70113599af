//! Macro-level renames from the FLTK 1.x compatibility headers.
//!
//! Covers frame and box constants, fonts, colors, cursors, path drawing,
//! the XForms emulation layer, OpenGL helpers and X11 globals. Several
//! entries rename to an intermediate `FL_`/`fl_` spelling that a later entry,
//! the inline table, or the final prefix strip finishes off.

use super::{Pass, Rule};

pub fn pass() -> Pass {
    Pass::new("defines", rules())
}

pub fn rules() -> Vec<Rule> {
    vec![
        // frame types map onto the matching box types
        Rule::literal("FL_UP_FRAME", "UP_BOX"),
        Rule::literal("FL_DOWN_FRAME", "DOWN_BOX"),
        Rule::literal("FL_THIN_UP_FRAME", "THIN_UP_BOX"),
        Rule::literal("FL_THIN_DOWN_FRAME", "THIN_DOWN_BOX"),
        Rule::literal("FL_ENGRAVED_FRAME", "ENGRAVED_BOX"),
        Rule::literal("FL_EMBOSSED_FRAME", "EMBOSSED_BOX"),
        Rule::literal("FL_ROUNDED_FRAME", "ROUNDED_BOX"),
        Rule::literal("FL_OVAL_FRAME", "OVAL_BOX"),
        Rule::literal("FL_PLASTIC_UP_FRAME", "PLASTIC_UP_BOX"),
        Rule::literal("FL_PLASTIC_DOWN_FRAME", "PLASTIC_DOWN_BOX"),
        Rule::literal("FL_FRAME", "FL_ENGRAVED_FRAME"),
        Rule::literal("FL_FRAME_BOX", "FL_ENGRAVED_BOX"),
        Rule::literal("FL_CIRCLE_BOX", "FL_ROUND_DOWN_BOX"),
        Rule::literal("FL_DIAMOND_BOX", "FL_DIAMOND_DOWN_BOX"),
        Rule::literal("FL_SYMBOL_LABEL", "FL_NORMAL_LABEL"),

        // alignment and font macros
        Rule::literal("Fl_Align", "Flags"),
        Rule::literal("FL_SYMBOL", "SYMBOL_FONT"),
        Rule::literal("FL_SCREEN", "SCREEN_FONT"),
        Rule::literal("FL_SCREEN_BOLD", "SCREEN_BOLD_FONT"),
        Rule::literal("FL_BOLD", "HELVETICA_BOLD"),
        Rule::literal("FL_ITALIC", "HELVETICA_ITALIC"),

        // style-backed sizes and colors
        Rule::literal("FL_NORMAL_SIZE", "(Widget::default_style->labelsize())"),
        Rule::literal("FL_FOREGROUND_COLOR", "(Widget::default_style->labelcolor_)"),
        Rule::literal("FL_BACKGROUND2_COLOR", "(Widget::default_style->color_)"),
        Rule::literal("FL_SELECTION_COLOR", "(Widget::default_style->selection_color_)"),

        // color helpers
        Rule::literal("fl_color_average", "lerp"),
        Rule::literal_n("fl_lighter", "lerp(WHITE,1,.67f)", 1),
        Rule::literal_n("fl_darker", "lerp(BLACK,1,.67f)", 1),
        Rule::literal("fl_rgb_color", "color"),
        Rule::call("fl_gray_ramp", "(GRAY00+(1))", 1),

        // cursors
        Rule::literal("Fl_Cursor", "Cursor*"),
        Rule::literal("FL_CURSOR_N", "CURSOR_NS"),
        Rule::literal("FL_CURSOR_NE", "CURSOR_NESW"),
        Rule::literal("FL_CURSOR_E", "CURSOR_WE"),
        Rule::literal("FL_CURSOR_SE", "CURSOR_NWSE"),
        Rule::literal("FL_CURSOR_S", "CURSOR_NS"),
        Rule::literal("FL_CURSOR_SW", "CURSOR_NESW"),
        Rule::literal("FL_CURSOR_W", "CURSOR_WE"),
        Rule::literal("FL_CURSOR_NW", "CURSOR_NWSE"),
        Rule::literal("FL_FILLED_CHART", "FL_FILL_CHART"),

        // path drawing
        Rule::literal("fl_mult_matrix", "concat"),
        Rule::literal("fl_begin_points", "newpath"),
        Rule::literal("fl_begin_line", "newpath"),
        Rule::literal("fl_begin_loop", "newpath"),
        Rule::literal("fl_begin_polygon", "newpath"),
        Rule::literal("fl_vertex", "addvertex"),
        Rule::literal("fl_curve", "addcurve"),
        Rule::literal("fl_circle", "addcircle"),
        Rule::literal("fl_end_points", "drawpoints"),
        Rule::literal("fl_end_line", "strokepath"),
        Rule::literal("fl_end_polygon", "fillpath"),
        Rule::literal("fl_begin_complex_polygon", "newpath"),
        Rule::literal("fl_gap", "closepath"),
        Rule::literal("fl_end_complex_polygon", "fillpath"),
        Rule::literal("fl_draw_pixmap", "draw_xpm"),
        Rule::literal("fl_measure_pixmap", "measure_xpm"),
        Rule::literal("fl_scroll", "scrollrect"),
        Rule::literal("fl_shortcut_label", "key_name"),

        // XForms compatibility: callbacks and colors
        Rule::literal("FL_WHEN_NEEDED", "FL_AUTO"),
        Rule::literal("FL_LCOL", "BLACK"),
        Rule::literal("FL_COL1", "GRAY75"),
        Rule::literal("FL_MCOL", "GRAY85"),
        Rule::literal("FL_LEFT_BCOL", "GRAY99"),
        Rule::literal("FL_TOP_BCOL", "GRAY90"),
        Rule::literal("FL_BOTTOM_BCOL", "GRAY35"),
        Rule::literal("FL_RIGHT_BCOL", "GRAY20"),
        Rule::literal("FL_INACTIVE", "GRAY66"),
        Rule::literal("FL_INACTIVE_COL", "GRAY66"),
        Rule::literal("FL_FREE_COL1", "Color(16)"),
        Rule::literal("FL_FREE_COL2", "Color(17)"),
        Rule::literal("FL_FREE_COL3", "Color(18)"),
        Rule::literal("FL_FREE_COL4", "Color(19)"),
        Rule::literal("FL_FREE_COL5", "Color(20)"),
        Rule::literal("FL_FREE_COL6", "Color(21)"),
        Rule::literal("FL_FREE_COL7", "Color(22)"),
        Rule::literal("FL_FREE_COL8", "Color(23)"),
        Rule::literal("FL_FREE_COL9", "Color(24)"),
        Rule::literal("FL_FREE_COL10", "Color(25)"),
        Rule::literal("FL_FREE_COL11", "Color(26)"),
        Rule::literal("FL_FREE_COL12", "Color(27)"),
        Rule::literal("FL_FREE_COL13", "Color(28)"),
        Rule::literal("FL_FREE_COL14", "Color(29)"),
        Rule::literal("FL_FREE_COL15", "Color(30)"),
        Rule::literal("FL_FREE_COL16", "Color(31)"),
        Rule::literal("FL_TOMATO", "Color(131)"),
        Rule::literal("FL_INDIANRED", "Color(164)"),
        Rule::literal("FL_SLATEBLUE", "Color(195)"),
        Rule::literal("FL_DARKGOLD", "Color(84)"),
        Rule::literal("FL_PALEGREEN", "Color(157)"),
        Rule::literal("FL_ORCHID", "Color(203)"),
        Rule::literal("FL_DARKCYAN", "Color(189)"),
        Rule::literal("FL_DARKTOMATO", "Color(113)"),
        Rule::literal("FL_WHEAT", "Color(174)"),

        // XForms boxes, fonts and return modes
        Rule::literal("FL_ALIGN_BESIDE", "ALIGN_INSIDE"),
        Rule::literal("FL_NO_FRAME", "NO_BOX"),
        Rule::literal("FL_ROUNDED3D_UPBOX", "ROUND_UP_BOX"),
        Rule::literal("FL_ROUNDED3D_DOWNBOX", "ROUND_DOWN_BOX"),
        Rule::literal("FL_OVAL3D_UPBOX", "ROUND_UP_BOX"),
        Rule::literal("FL_OVAL3D_DOWNBOX", "ROUND_DOWN_BOX"),
        Rule::literal("FL_DEFAULT_SIZE", "FL_SMALL_SIZE"),
        Rule::literal("FL_TINY_FONT", "FL_TINY_SIZE"),
        Rule::literal("FL_SMALL_FONT", "FL_SMALL_SIZE"),
        Rule::literal("FL_NORMAL_FONT", "FL_NORMAL_SIZE"),
        Rule::literal("FL_MEDIUM_FONT", "FL_MEDIUM_SIZE"),
        Rule::literal("FL_LARGE_FONT", "FL_LARGE_SIZE"),
        Rule::literal("FL_HUGE_FONT", "FL_HUGE_SIZE"),
        Rule::literal("FL_NORMAL_FONT1", "FL_SMALL_FONT"),
        Rule::literal("FL_NORMAL_FONT2", "FL_NORMAL_FONT"),
        Rule::literal("FL_DEFAULT_FONT", "FL_SMALL_FONT"),
        Rule::literal("FL_RETURN_END_CHANGED", "FL_WHEN_RELEASE"),
        Rule::literal("FL_RETURN_CHANGED", "FL_WHEN_CHANGED"),
        Rule::literal("FL_RETURN_END", "FL_WHEN_RELEASE_ALWAYS"),
        Rule::literal("FL_RETURN_ALWAYS", "(FL_WHEN_CHANGED|FL_WHEN_NOT_CHANGED)"),
        Rule::literal("FL_CMD_OPT", "void"),

        // XForms accessors, renamed to the names the inline table converts
        Rule::literal("fl_set_object_focus", "fl_set_focus_object"),
        Rule::literal("fl_set_object_lcolor", "fl_set_object_lcol"),
        Rule::literal("fl_set_object_align", "fl_set_object_lalign"),
        Rule::literal("fl_set_call_back", "fl_set_object_callback"),
        Rule::literal("resizebox", "_ddfdesign_kludge()"),
        Rule::literal("fl_set_initial_placement", "fl_set_form_geometry"),
        Rule::literal("FL_PLACE_FREE_CENTER", "(FL_PLACE_CENTER|FL_FREE_SIZE)"),
        Rule::literal("FL_PLACE_CENTERFREE", "(FL_PLACE_CENTER|FL_FREE_SIZE)"),
        Rule::literal("fl_prepare_form_window", "fl_show_form"),
        Rule::literal("fl_set_form_call_back", "fl_set_form_callback"),
        Rule::literal("fl_mousebutton", "fl_mouse_button"),
        Rule::literal("fl_set_clipping", "fl_clip"),
        Rule::literal("fl_unset_clipping", "fl_pop_clip"),
        Rule::literal("FL_NORMAL_BITMAP", "FL_NO_BOX"),
        Rule::literal("FL_NORMAL_PIXMAP", "FL_NO_BOX"),
        Rule::literal("FL_PUSH_BUTTON", "FL_TOGGLE_BUTTON"),
        Rule::literal("fl_set_button_shortcut", "fl_set_object_shortcut"),
        Rule::literal("fl_set_chart_lcol", "fl_set_chart_lcolor"),
        Rule::literal("FL_INVISIBLE_CURSOR", "FL_CURSOR_NONE"),
        Rule::literal("FL_DEFAULT_CURSOR", "FL_CURSOR_DEFAULT"),
        Rule::literal("FL_DIAL_COL1", "FL_GRAY"),
        Rule::literal("fl_show_messages", "fl_message"),
        Rule::literal("FL_HOR_BROWSER_SLIDER", "FL_HOR_SLIDER"),
        Rule::literal("FL_VERT_BROWSER_SLIDER", "FL_VERT_SLIDER"),
        Rule::literal("FL_SLIDER_COL1", "FL_GRAY"),
        Rule::literal("FL_NORMAL_TEXT", "FL_NO_BOX"),

        // OpenGL helpers
        Rule::literal("gl_start", "glstart"),
        Rule::literal("gl_finish", "glfinish"),
        Rule::literal("gl_color", "glsetcolor"),
        Rule::literal("gl_rect", "glstrokerect"),
        Rule::literal("gl_rectf", "glfillrect"),
        Rule::literal("gl_font", "glsetfont"),
        Rule::literal("gl_descent", "glgetdescent"),
        Rule::literal("gl_width", "glgetwidth"),
        Rule::literal("gl_draw", "gldrawtext"),
        Rule::literal("gl_draw_image", "gldrawimage"),

        // menu item flags
        Rule::literal("CHECKED", "FL_MENU_CHECK"),
        Rule::literal("UNCHECKED", "FL_MENU_BOX"),
        Rule::literal("DISABLED", "FL_MENU_INACTIVE"),

        // X11 globals
        Rule::literal("Fl_X", "CreatedWindow"),
        Rule::literal("fl_display", "xdisplay"),
        Rule::literal("fl_screen", "xscreen"),
        Rule::literal("fl_xevent", "(&xevent)"),
        Rule::literal("fl_colormap", "xcolormap"),
        Rule::literal("fl_open_display", "open_display"),
        Rule::literal("fl_visual", "xvisual"),
        Rule::literal("fl_window", "xwindow"),
    ]
}

//! Keyboard key constants.

use super::{Pass, Rule};

pub fn pass() -> Pass {
    Pass::new("keyboard", rules())
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::literal("FL_BackSpace", "BackSpaceKey"),
        Rule::literal("FL_Tab", "TabKey"),
        Rule::literal("FL_Enter", "ReturnKey"),
        Rule::literal("FL_Pause", "PauseKey"),
        Rule::literal("FL_Scroll_Lock", "ScrollLockKey"),
        Rule::literal("FL_Escape", "EscapeKey"),
        Rule::literal("FL_Home", "HomeKey"),
        Rule::literal("FL_Left", "LeftKey"),
        Rule::literal("FL_Up", "UpKey"),
        Rule::literal("FL_Right", "RightKey"),
        Rule::literal("FL_Down", "DownKey"),
        Rule::literal("FL_Page_Up", "PageUpKey"),
        Rule::literal("FL_Page_Down", "PageDownKey"),
        Rule::literal("FL_End", "EndKey"),
        Rule::literal("FL_Print", "PrintKey"),
        Rule::literal("FL_Insert", "InsertKey"),
        Rule::literal("FL_Menu", "MenuKey"),
        Rule::literal("FL_Help", "HelpKey"),
        Rule::literal("FL_Num_Lock", "NumLockKey"),

        // keypad: the specific names must run before the FL_KP prefix
        Rule::literal("FL_KP_Enter", "KeypadEnter"),
        Rule::literal("FL_KP_Last", "KeypadLast"),
        Rule::literal("FL_KP", "Keypad"),

        // modifiers
        Rule::literal("FL_Shift_L", "LeftShiftKey"),
        Rule::literal("FL_Shift_R", "RightShiftKey"),
        Rule::literal("FL_Control_L", "LeftCtrlKey"),
        Rule::literal("FL_Control_R", "RightCtrlKey"),
        Rule::literal("FL_Caps_Lock", "CapsLockKey"),
        Rule::literal("FL_Meta_L", "LeftMetaKey"),
        Rule::literal("FL_Meta_R", "RightMetaKey"),
        Rule::literal("FL_Alt_L", "LeftAltKey"),
        Rule::literal("FL_Alt_R", "RightAltKey"),
        Rule::literal("FL_Delete", "DeleteKey"),
    ]
}

//! Enumerations: events, colors, alignment combinations and widget subtypes.

use super::{Pass, Rule};

pub fn pass() -> Pass {
    Pass::new("enumerations", rules())
}

pub fn rules() -> Vec<Rule> {
    vec![
        // events
        Rule::literal("FL_KEYDOWN", "KEY"),
        Rule::literal("FL_KEYBOARD", "KEY"),

        // colors; FL_GRAY0 must precede FL_GRAY
        Rule::literal("FL_GRAY0", "GRAY00"),
        Rule::literal("FL_DARK3", "GRAY33"),
        Rule::literal("FL_DARK2", "GRAY60"),
        Rule::literal("FL_DARK1", "GRAY66"),
        Rule::literal("FL_GRAY", "GRAY75"),
        Rule::literal("FL_BACKGROUND_COLOR", "GRAY75"),
        Rule::literal("FL_LIGHT1", "GRAY85"),
        Rule::literal("FL_LIGHT2", "GRAY90"),
        Rule::literal("FL_LIGHT3", "GRAY99"),
        Rule::literal("FL_DARK_RED", "fltk::color(128,0,0)"),
        Rule::literal("FL_DARK_GREEN", "fltk::color(0,128,0)"),
        Rule::literal("FL_DARK_YELLOW", "fltk::color(128,128,0)"),
        Rule::literal("FL_DARK_BLUE", "fltk::color(0,0,128)"),
        Rule::literal("FL_DARK_MAGENTA", "fltk::color(128,0,128)"),
        Rule::literal("FL_DARK_CYAN", "fltk::color(0,128,128)"),
        Rule::literal("FL_GRAY_RAMP", "GRAY00"),
        Rule::literal("FL_COLOR_CUBE", "BLACK"),

        // alignment combinations
        Rule::literal("FL_ALIGN_TEXT_OVER_IMAGE", "ALIGN_BOTTOM|ALIGN_INSIDE"),
        Rule::literal("FL_ALIGN_TOP_LEFT", "ALIGN_TOP|ALIGN_LEFT"),
        Rule::literal("FL_ALIGN_TOP_RIGHT", "ALIGN_TOP|ALIGN_RIGHT"),
        Rule::literal("FL_ALIGN_BOTTOM_LEFT", "ALIGN_BOTTOM|ALIGN_LEFT"),
        Rule::literal("FL_ALIGN_BOTTOM_RIGHT", "ALIGN_BOTTOM|ALIGN_RIGHT"),
        Rule::literal("FL_ALIGN_LEFT_TOP", "ALIGN_LEFT|ALIGN_TOP"),
        Rule::literal("FL_ALIGN_RIGHT_TOP", "ALIGN_RIGHT|ALIGN_TOP"),
        Rule::literal("FL_ALIGN_LEFT_BOTTOM", "ALIGN_LEFT|ALIGN_BOTTOM"),
        Rule::literal("FL_ALIGN_RIGHT_BOTTOM", "ALIGN_RIGHT|ALIGN_BOTTOM"),

        // widget subtypes
        Rule::literal("FL_NORMAL_BROWSER", "Browser::NORMAL"),
        Rule::literal("FL_SELECT_BROWSER", "Browser::NORMAL"),
        Rule::literal("FL_HOLD_BROWSER", "Browser::NORMAL"),
        Rule::literal("FL_MULTI_BROWSER", "Browser::MULTI"),
        Rule::literal("FL_NORMAL_BUTTON", "Button::NORMAL"),
        Rule::literal("FL_TOGGLE_BUTTON", "Button::TOGGLE"),
        Rule::literal("FL_RADIO_BUTTON", "Button::RADIO"),
        Rule::literal("FL_HIDDEN_BUTTON", "Button::HIDDEN"),
        Rule::literal("FL_SQUARE_CLOCK", "Clock::SQUARE"),
        Rule::literal("FL_ROUND_CLOCK", "Clock::ROUND"),
        Rule::literal("FL_ANALOG_CLOCK", "Clock::SQUARE"),
        Rule::literal("FL_DIGITAL_CLOCK", "Clock::DIGITAL"),
        Rule::literal("FL_NORMAL_DIAL", "Dial::NORMAL"),
        Rule::literal("FL_LINE_DIAL", "Dial::LINE"),
        Rule::literal("FL_FILL_DIAL", "Dial::FILL"),
        Rule::literal("FL_NORMAL_INPUT", "Input::NORMAL"),
        Rule::literal("FL_MULTILINE_INPUT", "Input::MULTILINE"),
        Rule::literal("FL_SECRET_INPUT", "Input::SECRET"),
        Rule::literal("FL_INPUT_WRAP", "Input::WORDWRAP"),
        Rule::literal("FL_MULTILINE_INPUT_WRAP", "Input::WORDWRAP"),
        Rule::literal("FL_NORMAL_OUTPUT", "Input::NORMAL"),
        Rule::literal("FL_MULTILINE_OUTPUT", "Input::MULTILINE"),
        Rule::literal("FL_MULTILINE_OUTPUT_WRAP", "Input::WORDWRAP"),
        Rule::literal("FL_VERT_SLIDER", "Slider::LINEAR"),
        Rule::literal("FL_HOR_SLIDER", "Slider::HORIZONTAL"),
        Rule::literal("FL_VERT_FILL_SLIDER", "Slider::FILL"),
        Rule::literal("FL_HOR_FILL_SLIDER", "Slider::HORIZONTAL+fltk::Slider::FILL"),
        Rule::literal("FL_VERT_NICE_SLIDER", "Slider::LINEAR"),
        Rule::literal("FL_HOR_NICE_SLIDER", "Slider::HORIZONTAL"),
        Rule::literal("FL_RESERVED_TYPE", "Widget::RESERVED_TYPE"),
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
    fn dark_colors_become_rgb() {
        assert_eq!(run("FL_DARK_RED"), "fltk::color(128,0,0)");
    }

    #[test]
    fn gray_levels() {
        assert_eq!(run("FL_GRAY0 FL_GRAY"), "GRAY00 GRAY75");
    }

    #[test]
    fn alignment_combinations() {
        assert_eq!(run("FL_ALIGN_TOP_LEFT"), "ALIGN_TOP|ALIGN_LEFT");
    }

    #[test]
    fn widget_subtypes() {
        assert_eq!(run("b->type(FL_TOGGLE_BUTTON);"), "b->type(Button::TOGGLE);");
        assert_eq!(run("FL_HOR_FILL_SLIDER"), "Slider::HORIZONTAL+fltk::Slider::FILL");
    }
}

pub(crate) use self::board_display::BoardDisplay;

mod board_display;
